#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Lists,
    Tasks,
}

impl Resource {
    fn segment(&self) -> &'static str {
        match self {
            Resource::Lists => "lists",
            Resource::Tasks => "tasks",
        }
    }
}

/// The backend's named routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    Dashboard,
    Index(Resource),
    Store(Resource),
    Update(Resource, u64),
    Destroy(Resource, u64),
}

impl ApiRoute {
    /// Dotted route name, e.g. `tasks.update`.
    pub fn name(&self) -> String {
        match self {
            ApiRoute::Dashboard => "dashboard".to_string(),
            ApiRoute::Index(r) => format!("{}.index", r.segment()),
            ApiRoute::Store(r) => format!("{}.store", r.segment()),
            ApiRoute::Update(r, _) => format!("{}.update", r.segment()),
            ApiRoute::Destroy(r, _) => format!("{}.destroy", r.segment()),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            ApiRoute::Dashboard | ApiRoute::Index(_) => Method::Get,
            ApiRoute::Store(_) => Method::Post,
            ApiRoute::Update(..) => Method::Put,
            ApiRoute::Destroy(..) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiRoute::Dashboard => "/dashboard".to_string(),
            ApiRoute::Index(r) | ApiRoute::Store(r) => format!("/{}", r.segment()),
            ApiRoute::Update(r, id) | ApiRoute::Destroy(r, id) => format!("/{}/{}", r.segment(), id),
        }
    }
}
