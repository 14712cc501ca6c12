//! Path and operation declarations for the documented REST API.
//!
//! The handlers live in the API service itself, so operations are declared
//! here with the utoipa builders instead of `#[utoipa::path]` attributes.

use utoipa::openapi::path::{
    Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem,
    PathItemBuilder, PathItemType,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::security::SecurityRequirement;
use utoipa::openapi::{
    ArrayBuilder, ContentBuilder, ObjectBuilder, Ref, RefOr, Required, Response, ResponseBuilder,
    Schema, SchemaType,
};
use utoipa::Modify;

use super::BEARER_AUTH;

const JSON: &str = "application/json";
const INVALID_DATA: &str = "Dados inválidos";
const UNAUTHORIZED: &str = "Não autorizado";

/// Fixed wording of one CRUD resource's operations.
struct ResourceText {
    list: &'static str,
    listed: &'static str,
    create: &'static str,
    created: &'static str,
    get: &'static str,
    found: &'static str,
    not_found: &'static str,
    update: &'static str,
    updated: &'static str,
    delete: &'static str,
    deleted: &'static str,
    id: &'static str,
}

struct SearchText {
    summary: &'static str,
    name: &'static str,
    found: &'static str,
}

struct Resource {
    tag: &'static str,
    path: &'static str,
    schema: &'static str,
    input: &'static str,
    text: ResourceText,
    search: Option<SearchText>,
    /// PUT and DELETE require a bearer token and document 401.
    guarded_writes: bool,
    /// PUT documents 400 for a malformed body.
    update_rejects_invalid: bool,
}

const USERS: Resource = Resource {
    tag: "Users",
    path: "/users",
    schema: "User",
    input: "UserInput",
    text: ResourceText {
        list: "Lista todos os usuários",
        listed: "Lista de usuários",
        create: "Registra um novo usuário",
        created: "Usuário criado com sucesso",
        get: "Busca um usuário pelo ID",
        found: "Usuário encontrado",
        not_found: "Usuário não encontrado",
        update: "Atualiza um usuário",
        updated: "Usuário atualizado com sucesso",
        delete: "Remove um usuário",
        deleted: "Usuário removido com sucesso",
        id: "ID do usuário",
    },
    search: Some(SearchText {
        summary: "Busca usuários por nome",
        name: "Nome ou parte do nome do usuário",
        found: "Lista de usuários encontrados",
    }),
    guarded_writes: true,
    update_rejects_invalid: false,
};

const AUTHORS: Resource = Resource {
    tag: "Authors",
    path: "/authors",
    schema: "Author",
    input: "AuthorInput",
    text: ResourceText {
        list: "Lista todos os autores",
        listed: "Lista de autores",
        create: "Cria um novo autor",
        created: "Autor criado com sucesso",
        get: "Busca um autor pelo ID",
        found: "Autor encontrado",
        not_found: "Autor não encontrado",
        update: "Atualiza um autor",
        updated: "Autor atualizado com sucesso",
        delete: "Remove um autor",
        deleted: "Autor removido com sucesso",
        id: "ID do autor",
    },
    search: Some(SearchText {
        summary: "Busca autores por nome",
        name: "Nome ou parte do nome do autor",
        found: "Lista de autores encontrados",
    }),
    guarded_writes: false,
    update_rejects_invalid: true,
};

const POSTS: Resource = Resource {
    tag: "Posts",
    path: "/posts",
    schema: "Post",
    input: "PostInput",
    text: ResourceText {
        list: "Lista todos os posts",
        listed: "Lista de posts",
        create: "Cria um novo post",
        created: "Post criado com sucesso",
        get: "Busca um post pelo ID",
        found: "Post encontrado",
        not_found: "Post não encontrado",
        update: "Atualiza um post",
        updated: "Post atualizado com sucesso",
        delete: "Remove um post",
        deleted: "Post removido com sucesso",
        id: "ID do post",
    },
    search: None,
    guarded_writes: false,
    update_rejects_invalid: true,
};

const RESOURCES: [&Resource; 3] = [&USERS, &AUTHORS, &POSTS];

/// Adds every documented path to the generated document.
pub struct ApiPaths;

impl Modify for ApiPaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for (path, item) in api_paths() {
            openapi.paths.paths.insert(path, item);
        }
    }
}

/// All documented paths in declaration order.
pub fn api_paths() -> Vec<(String, PathItem)> {
    let mut paths = vec![("/auth/login".to_string(), login_path())];

    for resource in RESOURCES {
        paths.push((resource.path.to_string(), collection_path(resource)));
        paths.push((format!("{}/{{id}}", resource.path), item_path(resource)));

        if let Some(ref search) = resource.search {
            paths.push((
                format!("{}/search/{{name}}", resource.path),
                search_path(resource, search),
            ));
        }
    }

    paths
}

fn login_path() -> PathItem {
    let login = OperationBuilder::new()
        .summary(Some("Fazer login"))
        .description(Some("Autentica um usuário e retorna um token JWT"))
        .tag("Auth")
        .request_body(Some(json_body("LoginInput")))
        .response(
            "200",
            json_response("Login realizado com sucesso", schema_ref("LoginResponse")),
        )
        .response("401", error_response("Credenciais inválidas"))
        .response("400", error_response(INVALID_DATA))
        .build();

    PathItemBuilder::new()
        .operation(PathItemType::Post, login)
        .build()
}

fn collection_path(resource: &Resource) -> PathItem {
    let text = &resource.text;

    let list = OperationBuilder::new()
        .summary(Some(text.list))
        .tag(resource.tag)
        .response("200", json_response(text.listed, array_of(resource.schema)))
        .build();

    let create = OperationBuilder::new()
        .summary(Some(text.create))
        .tag(resource.tag)
        .request_body(Some(json_body(resource.input)))
        .response("201", json_response(text.created, schema_ref(resource.schema)))
        .response("400", error_response(INVALID_DATA))
        .build();

    PathItemBuilder::new()
        .operation(PathItemType::Get, list)
        .operation(PathItemType::Post, create)
        .build()
}

fn item_path(resource: &Resource) -> PathItem {
    let text = &resource.text;

    let get = OperationBuilder::new()
        .summary(Some(text.get))
        .tag(resource.tag)
        .parameter(path_param("id", text.id))
        .response("200", json_response(text.found, schema_ref(resource.schema)))
        .response("404", error_response(text.not_found))
        .build();

    let mut update = OperationBuilder::new()
        .summary(Some(text.update))
        .tag(resource.tag)
        .parameter(path_param("id", text.id))
        .request_body(Some(json_body(resource.input)))
        .response("200", json_response(text.updated, schema_ref(resource.schema)))
        .response("404", error_response(text.not_found));
    if resource.update_rejects_invalid {
        update = update.response("400", error_response(INVALID_DATA));
    }

    let mut delete = OperationBuilder::new()
        .summary(Some(text.delete))
        .tag(resource.tag)
        .parameter(path_param("id", text.id))
        .response("204", ResponseBuilder::new().description(text.deleted).build())
        .response("404", error_response(text.not_found));

    if resource.guarded_writes {
        update = guarded(update);
        delete = guarded(delete);
    }

    PathItemBuilder::new()
        .operation(PathItemType::Get, get)
        .operation(PathItemType::Put, update.build())
        .operation(PathItemType::Delete, delete.build())
        .build()
}

fn search_path(resource: &Resource, search: &SearchText) -> PathItem {
    let operation: Operation = OperationBuilder::new()
        .summary(Some(search.summary))
        .tag(resource.tag)
        .parameter(path_param("name", search.name))
        .response("200", json_response(search.found, array_of(resource.schema)))
        .build();

    PathItemBuilder::new()
        .operation(PathItemType::Get, operation)
        .build()
}

fn guarded(operation: OperationBuilder) -> OperationBuilder {
    operation
        .security(SecurityRequirement::new(BEARER_AUTH, Vec::<String>::new()))
        .response("401", error_response(UNAUTHORIZED))
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    Ref::from_schema_name(name).into()
}

fn array_of(name: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Array(
        ArrayBuilder::new().items(Ref::from_schema_name(name)).build(),
    ))
}

fn path_param(name: &str, description: &str) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .schema(Some(RefOr::T(Schema::Object(
            ObjectBuilder::new().schema_type(SchemaType::String).build(),
        ))))
        .build()
}

fn json_body(schema: &str) -> RequestBody {
    RequestBodyBuilder::new()
        .required(Some(Required::True))
        .content(JSON, ContentBuilder::new().schema(schema_ref(schema)).build())
        .build()
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(schema).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, schema_ref("Error"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(paths: &'a [(String, PathItem)], path: &str) -> &'a PathItem {
        &paths
            .iter()
            .find(|(p, _)| p == path)
            .unwrap_or_else(|| panic!("missing path {path}"))
            .1
    }

    fn status_codes(item: &PathItem, method: PathItemType) -> Vec<String> {
        item.operations[&method]
            .responses
            .responses
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_declares_every_documented_path() {
        let paths = api_paths();
        let names: Vec<&str> = paths.iter().map(|(p, _)| p.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "/auth/login",
                "/users",
                "/users/{id}",
                "/users/search/{name}",
                "/authors",
                "/authors/{id}",
                "/authors/search/{name}",
                "/posts",
                "/posts/{id}",
            ]
        );
    }

    #[test]
    fn test_user_writes_require_bearer_token() {
        let paths = api_paths();
        let users = find(&paths, "/users/{id}");

        for method in [PathItemType::Put, PathItemType::Delete] {
            let operation = &users.operations[&method];
            assert!(operation.security.as_ref().is_some_and(|s| s.len() == 1));
        }
        assert!(users.operations[&PathItemType::Get].security.is_none());

        assert_eq!(status_codes(users, PathItemType::Put), vec!["200", "401", "404"]);
        assert_eq!(status_codes(users, PathItemType::Delete), vec!["204", "401", "404"]);
    }

    #[test]
    fn test_author_and_post_updates_are_open_but_reject_bad_input() {
        let paths = api_paths();

        for path in ["/authors/{id}", "/posts/{id}"] {
            let item = find(&paths, path);
            assert!(item.operations[&PathItemType::Put].security.is_none());
            assert_eq!(status_codes(item, PathItemType::Put), vec!["200", "400", "404"]);
            assert_eq!(status_codes(item, PathItemType::Delete), vec!["204", "404"]);
        }
    }

    #[test]
    fn test_login_documents_credential_failures() {
        let paths = api_paths();
        let login = find(&paths, "/auth/login");

        assert_eq!(login.operations.len(), 1);
        assert_eq!(status_codes(login, PathItemType::Post), vec!["200", "400", "401"]);
    }

    #[test]
    fn test_operation_wording() {
        let paths = api_paths();
        let cases: [(&str, PathItemType, &str, &[(&str, &str)]); 18] = [
            (
                "/auth/login",
                PathItemType::Post,
                "Fazer login",
                &[
                    ("200", "Login realizado com sucesso"),
                    ("400", "Dados inválidos"),
                    ("401", "Credenciais inválidas"),
                ],
            ),
            ("/users", PathItemType::Get, "Lista todos os usuários", &[("200", "Lista de usuários")]),
            (
                "/users",
                PathItemType::Post,
                "Registra um novo usuário",
                &[("201", "Usuário criado com sucesso"), ("400", "Dados inválidos")],
            ),
            (
                "/users/{id}",
                PathItemType::Get,
                "Busca um usuário pelo ID",
                &[("200", "Usuário encontrado"), ("404", "Usuário não encontrado")],
            ),
            (
                "/users/{id}",
                PathItemType::Put,
                "Atualiza um usuário",
                &[
                    ("200", "Usuário atualizado com sucesso"),
                    ("401", "Não autorizado"),
                    ("404", "Usuário não encontrado"),
                ],
            ),
            (
                "/users/{id}",
                PathItemType::Delete,
                "Remove um usuário",
                &[
                    ("204", "Usuário removido com sucesso"),
                    ("401", "Não autorizado"),
                    ("404", "Usuário não encontrado"),
                ],
            ),
            (
                "/users/search/{name}",
                PathItemType::Get,
                "Busca usuários por nome",
                &[("200", "Lista de usuários encontrados")],
            ),
            ("/authors", PathItemType::Get, "Lista todos os autores", &[("200", "Lista de autores")]),
            (
                "/authors",
                PathItemType::Post,
                "Cria um novo autor",
                &[("201", "Autor criado com sucesso"), ("400", "Dados inválidos")],
            ),
            (
                "/authors/{id}",
                PathItemType::Get,
                "Busca um autor pelo ID",
                &[("200", "Autor encontrado"), ("404", "Autor não encontrado")],
            ),
            (
                "/authors/{id}",
                PathItemType::Put,
                "Atualiza um autor",
                &[
                    ("200", "Autor atualizado com sucesso"),
                    ("400", "Dados inválidos"),
                    ("404", "Autor não encontrado"),
                ],
            ),
            (
                "/authors/{id}",
                PathItemType::Delete,
                "Remove um autor",
                &[("204", "Autor removido com sucesso"), ("404", "Autor não encontrado")],
            ),
            (
                "/authors/search/{name}",
                PathItemType::Get,
                "Busca autores por nome",
                &[("200", "Lista de autores encontrados")],
            ),
            ("/posts", PathItemType::Get, "Lista todos os posts", &[("200", "Lista de posts")]),
            (
                "/posts",
                PathItemType::Post,
                "Cria um novo post",
                &[("201", "Post criado com sucesso"), ("400", "Dados inválidos")],
            ),
            (
                "/posts/{id}",
                PathItemType::Get,
                "Busca um post pelo ID",
                &[("200", "Post encontrado"), ("404", "Post não encontrado")],
            ),
            (
                "/posts/{id}",
                PathItemType::Put,
                "Atualiza um post",
                &[
                    ("200", "Post atualizado com sucesso"),
                    ("400", "Dados inválidos"),
                    ("404", "Post não encontrado"),
                ],
            ),
            (
                "/posts/{id}",
                PathItemType::Delete,
                "Remove um post",
                &[("204", "Post removido com sucesso"), ("404", "Post não encontrado")],
            ),
        ];

        let case_count = cases.len();
        for (path, method, summary, expected) in cases {
            let operation = &find(&paths, path).operations[&method];
            assert_eq!(operation.summary.as_deref(), Some(summary), "{path}");

            let described: Vec<(&str, &str)> = operation
                .responses
                .responses
                .iter()
                .map(|(status, response)| match response {
                    RefOr::T(response) => (status.as_str(), response.description.as_str()),
                    RefOr::Ref(_) => panic!("{path} {status} is a response ref"),
                })
                .collect();
            assert_eq!(described, expected, "{summary}");
        }

        let operations: usize = paths.iter().map(|(_, item)| item.operations.len()).sum();
        assert_eq!(operations, case_count);
    }

    #[test]
    fn test_path_parameters_are_required_strings() {
        let paths = api_paths();
        let search = find(&paths, "/authors/search/{name}");
        let operation = serde_json::to_value(&search.operations[&PathItemType::Get]).unwrap();
        let param = &operation["parameters"][0];

        assert_eq!(param["name"], "name");
        assert_eq!(param["in"], "path");
        assert_eq!(param["required"], true);
        assert_eq!(param["schema"]["type"], "string");
        assert_eq!(param["description"], "Nome ou parte do nome do autor");
    }
}
