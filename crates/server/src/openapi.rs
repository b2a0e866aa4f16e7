use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Car as returned by the API. `id` is an integer on the database backend and a
/// string on the memory backend.
#[derive(ToSchema)]
pub struct CarDoc {
    #[schema(example = "101")]
    pub id: String,
    #[schema(example = "Mercedes")]
    pub title: String,
    #[schema(example = "Blue")]
    pub color: String,
}

/// POST body. `id` is required by the memory backend and ignored by the database backend.
#[derive(ToSchema)]
pub struct CreateCarDoc {
    pub id: Option<String>,
    pub title: String,
    pub color: String,
}

/// PUT body. Both fields are replaced; neither may be omitted or blank.
#[derive(ToSchema)]
pub struct UpdateCarDoc {
    pub title: String,
    pub color: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cars::list_cars,
        crate::routes::cars::get_car,
        crate::routes::cars::create_car,
        crate::routes::cars::update_car,
        crate::routes::cars::delete_car,
    ),
    components(
        schemas(
            HealthResponse,
            CarDoc,
            CreateCarDoc,
            UpdateCarDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars")
    )
)]
pub struct ApiDoc;
