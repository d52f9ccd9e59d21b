//! Request handling around the crafting engine.
//!
//! `CraftingService` is the transport-facing collaborator: it checks the
//! request shape, resolves ids through a [`CraftingCatalog`], runs the
//! engine and renders a JSON reply. Client mistakes and service failures
//! are kept apart so a front-end can map them onto its own status codes.

use crate::augment::AugmentRecord;
use crate::catalog::CraftingCatalog;
use crate::crafted::CraftedRifle;
use crate::engine::{self, AUGMENT_COUNT, MATERIAL_COUNT};
use crate::error::{CraftError, RecordKind, Result};
use crate::material::MaterialRecord;
use crate::record_id::RecordId;
use crate::roll::Roller;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;
use tracing::{error, info, warn};

/// A `{ "id": n }` reference to a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: RecordId,
}

impl From<i64> for IdRef {
    fn from(raw: i64) -> Self {
        Self { id: raw.into() }
    }
}

/// The body of a craft request.
///
/// # Examples
///
/// ```rust
/// use riflecraft::service::CraftRequest;
///
/// let request = CraftRequest::from_ids([1, 1, 2, 3, 4], [1; 10]);
/// assert_eq!(request.materials.len(), 5);
/// assert!(request.validate_shape().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftRequest {
    #[serde(default)]
    pub materials: Vec<IdRef>,
    #[serde(default)]
    pub augments: Vec<IdRef>,
}

impl CraftRequest {
    pub fn from_ids(
        materials: impl IntoIterator<Item = i64>,
        augments: impl IntoIterator<Item = i64>,
    ) -> Self {
        Self {
            materials: materials.into_iter().map(IdRef::from).collect(),
            augments: augments.into_iter().map(IdRef::from).collect(),
        }
    }

    /// Reject requests without exactly five materials and ten augments.
    ///
    /// Materials are checked first.
    pub fn validate_shape(&self) -> Result<()> {
        check_count(RecordKind::Material, MATERIAL_COUNT, self.materials.len())?;
        check_count(RecordKind::Augment, AUGMENT_COUNT, self.augments.len())
    }

    pub fn material_ids(&self) -> Vec<RecordId> {
        self.materials.iter().map(|r| r.id).collect()
    }

    pub fn augment_ids(&self) -> Vec<RecordId> {
        self.augments.iter().map(|r| r.id).collect()
    }
}

fn check_count(kind: RecordKind, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(CraftError::InputShape {
            kind,
            expected,
            actual,
        })
    }
}

fn check_resolved(kind: RecordKind, requested: usize, resolved: usize) -> Result<()> {
    if requested == resolved {
        Ok(())
    } else {
        Err(CraftError::MissingData {
            kind,
            requested,
            resolved,
        })
    }
}

/// The body of a successful craft reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraftResponse {
    #[serde(rename = "craftedRifle")]
    pub crafted_rifle: CraftedRifle,
}

/// Operations the service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Materials,
    Augments,
    Craft,
}

impl Route {
    /// Message returned when the route fails on the service side.
    fn failure_message(self) -> &'static str {
        match self {
            Route::Materials => "Error fetching materials",
            Route::Augments => "Error fetching augments",
            Route::Craft => "Crafting failed.",
        }
    }
}

impl FromStr for Route {
    type Err = CraftError;

    /// Accepts `materials`, `/materials`, `/api/materials` and the same
    /// forms for `augments` and `craft`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim_start_matches('/');
        let name = name.strip_prefix("api/").unwrap_or(name);
        match name {
            "materials" => Ok(Route::Materials),
            "augments" => Ok(Route::Augments),
            "craft" => Ok(Route::Craft),
            _ => Err(CraftError::UnknownRoute(s.to_string())),
        }
    }
}

/// How a request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ClientError,
    ServerError,
}

/// A rendered reply: an outcome plus its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub outcome: Outcome,
    pub body: Value,
}

impl Reply {
    fn success(body: Value) -> Self {
        Self {
            outcome: Outcome::Success,
            body,
        }
    }

    fn failure(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Resolves requests against a catalog and runs the engine.
pub struct CraftingService<C> {
    catalog: C,
}

impl<C: CraftingCatalog> CraftingService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn list_materials(&self) -> Result<Vec<MaterialRecord>> {
        self.catalog.all_materials()
    }

    pub fn list_augments(&self) -> Result<Vec<AugmentRecord>> {
        self.catalog.all_augments()
    }

    /// Validate, resolve and craft.
    ///
    /// The engine only runs once the shape check passes and every id,
    /// duplicates included, resolved to a record.
    pub fn craft<R: Roller + ?Sized>(
        &self,
        request: &CraftRequest,
        roller: &mut R,
    ) -> Result<CraftResponse> {
        request.validate_shape()?;

        let material_ids = request.material_ids();
        let materials = self.catalog.fetch_materials_by_ids(&material_ids)?;
        check_resolved(RecordKind::Material, material_ids.len(), materials.len())?;

        let augment_ids = request.augment_ids();
        let augments = self.catalog.fetch_augments_by_ids(&augment_ids)?;
        check_resolved(RecordKind::Augment, augment_ids.len(), augments.len())?;

        let crafted_rifle = engine::craft(&materials, &augments, roller);
        Ok(CraftResponse { crafted_rifle })
    }

    /// Serve one route and render the reply as JSON.
    ///
    /// `body` is only read by [`Route::Craft`].
    pub fn handle<R: Roller + ?Sized>(
        &self,
        route: Route,
        body: Option<&str>,
        roller: &mut R,
    ) -> Reply {
        let result = match route {
            Route::Materials => self.list_materials().and_then(to_json),
            Route::Augments => self.list_augments().and_then(to_json),
            Route::Craft => parse_request(body)
                .and_then(|request| self.craft(&request, roller))
                .and_then(to_json),
        };

        match result {
            Ok(body) => {
                info!(?route, "request served");
                Reply::success(body)
            }
            Err(err) if err.is_client_error() => {
                warn!(?route, %err, "request rejected");
                Reply::failure(Outcome::ClientError, err.to_string())
            }
            Err(err) => {
                error!(?route, %err, "request failed");
                Reply::failure(Outcome::ServerError, route.failure_message())
            }
        }
    }

    /// Like [`handle`](Self::handle), but takes the route as a string.
    pub fn handle_path<R: Roller + ?Sized>(
        &self,
        path: &str,
        body: Option<&str>,
        roller: &mut R,
    ) -> Reply {
        match path.parse::<Route>() {
            Ok(route) => self.handle(route, body, roller),
            Err(err) => {
                warn!(path, "unknown route");
                Reply::failure(Outcome::ClientError, err.to_string())
            }
        }
    }
}

fn parse_request(body: Option<&str>) -> Result<CraftRequest> {
    let body = body.ok_or_else(|| CraftError::MalformedRequest("missing request body".into()))?;
    serde_json::from_str(body).map_err(|e| CraftError::MalformedRequest(e.to_string()))
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
