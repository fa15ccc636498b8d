use serde::{Deserialize, Serialize};
use strum::EnumIter;

#[cfg(feature = "database")]
use sea_orm::DeriveActiveEnum;

/// Format of a submitted homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[cfg_attr(feature = "database", derive(DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "i32", db_type = "Integer"))]
pub enum ContentType {
    #[cfg_attr(feature = "database", sea_orm(num_value = 0))]
    Application,
    #[cfg_attr(feature = "database", sea_orm(num_value = 1))]
    Pdf,
    #[cfg_attr(feature = "database", sea_orm(num_value = 2))]
    Zip,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_content_type_variants() {
        let all: Vec<ContentType> = ContentType::iter().collect();
        assert_eq!(
            all,
            vec![ContentType::Application, ContentType::Pdf, ContentType::Zip]
        );
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_content_type_codes() {
        use sea_orm::ActiveEnum;

        let codes: Vec<i32> = ContentType::iter().map(|c| c.to_value()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
        assert_eq!(ContentType::try_from_value(&2).unwrap(), ContentType::Zip);
        assert!(ContentType::try_from_value(&3).is_err());
    }
}
