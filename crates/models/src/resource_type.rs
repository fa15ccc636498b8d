use serde::{Deserialize, Serialize};
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::DeriveActiveEnum;

/// The kind of learning material a course resource points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[cfg_attr(feature = "database", derive(DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "i32", db_type = "Integer"))]
pub enum ResourceType {
    #[cfg_attr(feature = "database", sea_orm(num_value = 0))]
    Video,
    #[cfg_attr(feature = "database", sea_orm(num_value = 1))]
    Presentation,
    #[cfg_attr(feature = "database", sea_orm(num_value = 2))]
    Document,
    #[cfg_attr(feature = "database", sea_orm(num_value = 3))]
    Other,
}
