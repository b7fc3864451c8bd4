use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rosterd API",
        version = "1.0.0",
        description = "Monthly shift roster computed from employees, shift rules and time-off requests"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::shifts_handler::get_shifts,
    ),
    components(schemas(
        crate::models::Employee,
        crate::models::ShiftRule,
        crate::models::TimeOffRequest,
        crate::models::Assignment,
        crate::models::WeeklySchedule,
        crate::models::EmployeeWeek,
    )),
    tags(
        (name = "shifts", description = "Monthly shift schedules"),
        (name = "health", description = "Process health")
    )
)]
pub struct ApiDoc;
