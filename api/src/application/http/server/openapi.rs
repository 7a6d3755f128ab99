use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shyft API",
        description = "Shift scheduler service API",
        version = "1.0.0"
    ),
    tags(
        (name = "shift-schedule", description = "Shift schedule management")
    )
)]
pub struct ApiDoc;
