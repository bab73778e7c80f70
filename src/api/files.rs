use crate::auth::auth::AuthUser;
use crate::model::{
    file_item::{Breadcrumb, FileItem},
    navigation::Module,
};
use crate::state::Shared;
use crate::store::files::{FileCatalog, normalize_path};
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FolderQuery {
    /// Folder to open; the root when omitted.
    #[schema(example = "/Financial Reports")]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FileSearchQuery {
    #[serde(default)]
    #[schema(example = "report")]
    pub q: String,
    /// Folder shown when `q` is empty; the root when omitted.
    #[schema(example = "/HR Documents")]
    pub path: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct FolderResponse {
    #[schema(example = "/Financial Reports")]
    pub path: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub items: Vec<FileItem>,
}

#[derive(Serialize, ToSchema)]
pub struct FileSearchResponse {
    pub items: Vec<FileItem>,
    #[schema(example = 2)]
    pub total: usize,
}

/// Open a folder
#[utoipa::path(
    get,
    path = "/api/files",
    params(
        ("path", Query, description = "Folder path, defaults to /")
    ),
    responses(
        (status = 200, description = "Folder contents", body = FolderResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Files"
)]
pub async fn list_folder(
    auth: AuthUser,
    catalog: Shared<FileCatalog>,
    query: web::Query<FolderQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Files)?;

    let path = normalize_path(query.path.as_deref().unwrap_or("/"));
    Ok(HttpResponse::Ok().json(FolderResponse {
        breadcrumbs: catalog.breadcrumbs(&path),
        items: catalog.list_dir(&path),
        path,
    }))
}

/// Search the whole file tree
#[utoipa::path(
    get,
    path = "/api/files/search",
    params(
        ("q", Query, description = "Matches name, path or author; empty lists `path`"),
        ("path", Query, description = "Current folder, defaults to /")
    ),
    responses(
        (status = 200, description = "Matching files and folders", body = FileSearchResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Files"
)]
pub async fn search_files(
    auth: AuthUser,
    catalog: Shared<FileCatalog>,
    query: web::Query<FileSearchQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_module(Module::Files)?;

    let items = catalog.search(&query.q, query.path.as_deref().unwrap_or("/"));
    Ok(HttpResponse::Ok().json(FileSearchResponse {
        total: items.len(),
        items,
    }))
}
