//! Route table served by the `tessera` binary.

use std::path::PathBuf;

use serde::Serialize;

use crate::files;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::{Handler, Respond, Route};

/// Path of the landing page, relative to the static root.
pub const INDEX_PAGE: &str = "/websites/index.html";

/// Serves files from `root`.
///
/// With `page` set, every request gets that one file; otherwise the request
/// path selects the file. Anything unreadable is a bodiless 404.
pub struct StaticFiles {
    root: PathBuf,
    page: Option<String>,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            page: None,
        }
    }

    pub fn page(root: impl Into<PathBuf>, page: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            page: Some(page.into()),
        }
    }
}

impl Handler for StaticFiles {
    fn handle(&self, req: &Request, res: &mut dyn Respond) -> anyhow::Result<()> {
        let path = self.page.as_deref().unwrap_or(&req.path);

        let response = match files::read_file(&self.root, path) {
            Some(file) => ResponseBuilder::new(StatusCode::Ok)
                .content(file.content_type, file.contents)
                .build(),
            None => Response::not_found(),
        };

        res.send(&response);
        Ok(())
    }
}

/// Writes `value` as an `application/json` 200 response.
pub fn respond_json(res: &mut dyn Respond, value: &impl Serialize) -> anyhow::Result<()> {
    let body = serde_json::to_string(value)?;
    res.send(
        &ResponseBuilder::new(StatusCode::Ok)
            .content("application/json", body)
            .build(),
    );
    Ok(())
}

fn echo_path_variables(req: &Request, res: &mut dyn Respond) -> anyhow::Result<()> {
    respond_json(res, &req.path_variables)
}

fn echo_query(req: &Request, res: &mut dyn Respond) -> anyhow::Result<()> {
    respond_json(res, &req.query)
}

/// The binary's routes, in registration order.
pub fn default_routes(static_root: impl Into<PathBuf>) -> Vec<Route> {
    let root = static_root.into();

    vec![
        Route::with_handler(Method::GET, "/", StaticFiles::page(root.clone(), INDEX_PAGE)),
        Route::with_handler(Method::GET, "/websites/*", StaticFiles::new(root)),
        Route::new(Method::GET, "/demo/{variable}/path/{uri}", echo_path_variables),
        Route::new(Method::GET, "/query", echo_query),
    ]
}
