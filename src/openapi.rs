//! OpenAPI document describing the movies HTTP surface.

use crate::error::{ErrorBody, ValidationErrorBody};
use crate::model::{CreateMovieRequest, Movie, UpdateMovieRequest};
use crate::response::{CreatedBody, MessageBody};
use utoipa::openapi::{
    content::ContentBuilder,
    info::InfoBuilder,
    path::{
        HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathsBuilder,
    },
    request_body::RequestBodyBuilder,
    response::{Response, ResponseBuilder, ResponsesBuilder},
    schema::{Array, ComponentsBuilder, ObjectBuilder, Schema, SchemaType, Type},
    tag::TagBuilder,
    OpenApi, OpenApiBuilder, Ref, RefOr, Required,
};
use utoipa::{PartialSchema, ToSchema};

const TAG: &str = "Movies";

/// Build the document served at `/api-docs-json`.
pub fn api_doc() -> OpenApi {
    let mut components = ComponentsBuilder::new();
    components = register::<Movie>(components);
    components = register::<CreateMovieRequest>(components);
    components = register::<UpdateMovieRequest>(components);
    components = register::<CreatedBody>(components);
    components = register::<MessageBody>(components);
    components = register::<ErrorBody>(components);
    components = register::<ValidationErrorBody>(components);

    let collection = PathItemBuilder::new()
        .operation(
            HttpMethod::Get,
            operation("listMovies", "List all movies", "Returns every movie in the store.")
                .responses(
                    ResponsesBuilder::new()
                        .response("200", array_response("List of movies", "Movie"))
                        .response("500", json_response("Store failure", "ErrorBody"))
                        .build(),
                )
                .build(),
        )
        .operation(
            HttpMethod::Post,
            operation(
                "createMovie",
                "Create a movie",
                "Inserts a movie and returns its assigned id.",
            )
            .request_body(Some(request_body("CreateMovieRequest", true)))
            .responses(
                ResponsesBuilder::new()
                    .response("201", json_response("Movie created", "CreatedBody"))
                    .response("400", json_response("Invalid fields", "ValidationErrorBody"))
                    .response("500", json_response("Store failure", "ErrorBody"))
                    .build(),
            )
            .build(),
        )
        .build();

    let item = PathItemBuilder::new()
        .operation(
            HttpMethod::Get,
            by_id(operation("getMovie", "Get a movie by id", "Returns one movie."))
                .responses(
                    ResponsesBuilder::new()
                        .response("200", json_response("Movie found", "Movie"))
                        .response("400", json_response("Malformed id", "ValidationErrorBody"))
                        .response("404", json_response("Movie not found", "ErrorBody"))
                        .response("500", json_response("Store failure", "ErrorBody"))
                        .build(),
                )
                .build(),
        )
        .operation(
            HttpMethod::Patch,
            by_id(operation(
                "updateMovie",
                "Update a movie",
                "Overwrites only the supplied fields; absent or null fields keep their stored value.",
            ))
            .request_body(Some(request_body("UpdateMovieRequest", true)))
            .responses(
                ResponsesBuilder::new()
                    .response("200", json_response("Movie updated", "MessageBody"))
                    .response(
                        "400",
                        json_response(
                            "Malformed id, invalid fields or nothing to update",
                            "ValidationErrorBody",
                        ),
                    )
                    .response("404", json_response("Movie not found", "ErrorBody"))
                    .response("500", json_response("Store failure", "ErrorBody"))
                    .build(),
            )
            .build(),
        )
        .operation(
            HttpMethod::Delete,
            by_id(operation(
                "deleteMovie",
                "Delete a movie",
                "Removes the movie permanently.",
            ))
            .responses(
                ResponsesBuilder::new()
                    .response("200", json_response("Movie deleted", "MessageBody"))
                    .response("400", json_response("Malformed id", "ValidationErrorBody"))
                    .response("404", json_response("Movie not found", "ErrorBody"))
                    .response("500", json_response("Store failure", "ErrorBody"))
                    .build(),
            )
            .build(),
        )
        .build();

    let paths = PathsBuilder::new()
        .path("/movies", collection)
        .path("/movies/{id}", item)
        .build();

    let info = InfoBuilder::new()
        .title("Movies API")
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some("CRUD over popular movies"))
        .build();

    OpenApiBuilder::new()
        .info(info)
        .paths(paths)
        .components(Some(components.build()))
        .tags(Some(vec![TagBuilder::new()
            .name(TAG)
            .description(Some("Operations on movies"))
            .build()]))
        .build()
}

/// Add `T` and every schema it references to the components section.
fn register<T: ToSchema>(components: ComponentsBuilder) -> ComponentsBuilder {
    let mut collected: Vec<(String, RefOr<Schema>)> =
        vec![(T::name().to_string(), <T as PartialSchema>::schema())];
    T::schemas(&mut collected);
    collected
        .into_iter()
        .fold(components, |c, (name, schema)| c.schema(name, schema))
}

fn operation(id: &str, summary: &str, description: &str) -> OperationBuilder {
    OperationBuilder::new()
        .operation_id(Some(id))
        .summary(Some(summary))
        .description(Some(description))
        .tag(TAG)
}

fn by_id(op: OperationBuilder) -> OperationBuilder {
    let schema = Schema::Object(
        ObjectBuilder::new()
            .schema_type(SchemaType::Type(Type::Integer))
            .build(),
    );
    op.parameter(
        ParameterBuilder::new()
            .name("id")
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .description(Some("Movie id"))
            .schema(Some(schema))
            .build(),
    )
}

fn request_body(schema_name: &str, required: bool) -> utoipa::openapi::request_body::RequestBody {
    let content = || {
        ContentBuilder::new()
            .schema(Some(RefOr::Ref(Ref::from_schema_name(schema_name))))
            .build()
    };
    let mut body = RequestBodyBuilder::new()
        .description(Some(
            "Movie fields as JSON, or as XML child elements of a single root element",
        ))
        .content("application/json", content())
        .content("application/xml", content());
    if required {
        body = body.required(Some(Required::True));
    }
    body.build()
}

fn json_response(description: &str, schema_name: &str) -> Response {
    let content = ContentBuilder::new()
        .schema(Some(RefOr::Ref(Ref::from_schema_name(schema_name))))
        .build();
    ResponseBuilder::new()
        .description(description)
        .content("application/json", content)
        .build()
}

fn array_response(description: &str, item_schema: &str) -> Response {
    let content = ContentBuilder::new()
        .schema(Some(Schema::Array(Array::new(Ref::from_schema_name(item_schema)))))
        .build();
    ResponseBuilder::new()
        .description(description)
        .content("application/json", content)
        .build()
}
