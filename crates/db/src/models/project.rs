//! Project (property listing) entity model and DTOs.

use landmark_core::listing::validate_project_status;
use landmark_core::types::{DbId, Timestamp};
use landmark_core::validation::validate_url_list;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// One flat layout offered within a project, stored in the `flat_types`
/// JSONB column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FlatType {
    #[validate(length(min = 1, message = "Type name is required."))]
    pub name: String,
    /// Floor area in square feet; fractional areas are allowed.
    #[validate(range(min = 1.0, message = "Area must be greater than 0."))]
    pub area: f64,
    #[validate(range(min = 0, message = "Bedrooms required."))]
    pub bedrooms: i32,
    #[validate(range(min = 0, message = "Bathrooms required."))]
    pub bathrooms: i32,
    #[validate(range(min = 0, message = "Verandas required."))]
    pub verandas: i32,
}

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub location: String,
    pub status: String,
    pub flat_types: Json<Vec<FlatType>>,
    pub elevators: i32,
    pub land_area: String,
    pub level: String,
    pub parking: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. New projects are never featured.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 3, message = "Title must be at least 3 characters long."))]
    pub title: String,
    #[validate(length(min = 10, message = "Short description is required."))]
    pub short_description: String,
    #[validate(length(min = 20, message = "Full description is required."))]
    pub description: String,
    /// Blank entries are dropped before validation.
    #[validate(custom(function = "validate_url_list"))]
    pub image_urls: Vec<String>,
    #[validate(length(min = 3, message = "Location is required."))]
    pub location: String,
    /// Defaults to `Under Construction` if omitted.
    #[validate(custom(function = "validate_project_status"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "At least one flat type is required."), nested)]
    pub flat_types: Vec<FlatType>,
    #[validate(range(min = 0, message = "Number of elevators is required."))]
    pub elevators: i32,
    #[validate(length(min = 1, message = "Land area is required."))]
    pub land_area: String,
    #[validate(length(min = 1, message = "Level information is required."))]
    pub level: String,
    #[validate(length(min = 1, message = "Parking information is required."))]
    pub parking: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; supplied
/// fields are validated with the same rules as on create.
///
/// For the SEO fields an empty string clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 3, message = "Title must be at least 3 characters long."))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "Short description is required."))]
    pub short_description: Option<String>,
    #[validate(length(min = 20, message = "Full description is required."))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_url_list"))]
    pub image_urls: Option<Vec<String>>,
    #[validate(length(min = 3, message = "Location is required."))]
    pub location: Option<String>,
    #[validate(custom(function = "validate_project_status"))]
    pub status: Option<String>,
    #[validate(length(min = 1, message = "At least one flat type is required."), nested)]
    pub flat_types: Option<Vec<FlatType>>,
    #[validate(range(min = 0, message = "Number of elevators is required."))]
    pub elevators: Option<i32>,
    #[validate(length(min = 1, message = "Land area is required."))]
    pub land_area: Option<String>,
    #[validate(length(min = 1, message = "Level information is required."))]
    pub level: Option<String>,
    #[validate(length(min = 1, message = "Parking information is required."))]
    pub parking: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

/// Request body for `PUT /admin/projects/{id}/featured`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFeatured {
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use landmark_core::validation::FieldErrors;

    use super::*;

    fn valid_create() -> CreateProject {
        CreateProject {
            title: "The Azure Residence".into(),
            short_description: "Luxurious apartments with city views.".into(),
            description: "Modern architecture and luxurious living in the heart of the city."
                .into(),
            image_urls: vec!["https://cdn.example.com/azure-1.jpg".into()],
            location: "https://maps.example.com/azure".into(),
            status: None,
            flat_types: vec![FlatType {
                name: "Type A".into(),
                area: 1800.0,
                bedrooms: 3,
                bathrooms: 2,
                verandas: 2,
            }],
            elevators: 2,
            land_area: "10 katha".into(),
            level: "G+9".into(),
            parking: "Basement, 20 cars".into(),
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
        }
    }

    #[test]
    fn valid_create_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_reports_each_failing_field() {
        let mut input = valid_create();
        input.title = "Az".into();
        input.status = Some("Demolished".into());
        input.flat_types[0].area = 0.0;

        let errors = FieldErrors::from(&input.validate().unwrap_err());
        assert!(errors.get("title").is_some());
        assert!(errors.get("status").is_some());
        assert_eq!(
            errors.get("flat_types[0].area"),
            Some(&["Area must be greater than 0.".to_string()][..])
        );
        assert!(errors.get("location").is_none());
    }

    #[test]
    fn create_requires_flat_types_and_images() {
        let mut input = valid_create();
        input.flat_types.clear();
        input.image_urls.clear();

        let errors = FieldErrors::from(&input.validate().unwrap_err());
        assert!(errors.get("flat_types").is_some());
        assert!(errors.get("image_urls").is_some());
    }

    #[test]
    fn flat_type_accepts_fractional_area() {
        let flat: FlatType = serde_json::from_value(serde_json::json!({
            "name": "Type A",
            "area": 1250.5,
            "bedrooms": 3,
            "bathrooms": 2,
            "verandas": 1
        }))
        .expect("fractional area should deserialize");
        assert_eq!(flat.area, 1250.5);
        assert!(flat.validate().is_ok());

        let mut input = valid_create();
        input.flat_types = vec![flat];
        assert!(input.validate().is_ok());
    }

    #[test]
    fn flat_type_area_minimum_is_one() {
        let mut input = valid_create();
        input.flat_types[0].area = 1.0;
        assert!(input.validate().is_ok());

        input.flat_types[0].area = 0.5;
        let errors = FieldErrors::from(&input.validate().unwrap_err());
        assert!(errors.get("flat_types[0].area").is_some());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateProject::default().validate().is_ok());
    }

    #[test]
    fn update_validates_supplied_fields() {
        let input = UpdateProject {
            image_urls: Some(vec!["not-a-url".into()]),
            ..Default::default()
        };
        let errors = FieldErrors::from(&input.validate().unwrap_err());
        assert_eq!(errors.get("image_urls"), Some(&["Invalid URL".to_string()][..]));
    }
}
