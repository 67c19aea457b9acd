pub mod breadcrumbs;
pub mod route;

pub use breadcrumbs::{breadcrumb_json_ld, breadcrumbs, Breadcrumb, BreadcrumbContext, HOME_LABEL_KEY};
pub use route::{join_path, Route, RouteError};
