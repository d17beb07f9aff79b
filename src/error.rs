use crate::form::error::FormError;
use crate::hours::error::HoursLookupError;
use crate::plan::error::CatalogError;
use crate::tools::error::ToolsError;
use dto::error::DtoError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Invalid record received.")]
    Dto(#[from] DtoError),
    #[error("The plan catalog is misconfigured.")]
    Catalog(#[from] CatalogError),
    #[error("Worked hours couldn't be looked up.")]
    HoursLookup(#[from] HoursLookupError),
    #[error("The form can't be submitted.")]
    Form(#[from] FormError),
    #[error("Error while setting the app up.")]
    Tools(#[from] ToolsError),
}
