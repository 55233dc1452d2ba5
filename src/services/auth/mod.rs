pub mod context;
pub mod factory;
pub mod header;
pub mod jwt;
pub mod resolver;

pub use context::{AuthCtx, Role};
pub use factory::build_identity_resolver;
pub use header::HeaderIdentityResolver;
pub use jwt::JwtIdentityResolver;
pub use resolver::{AuthError, IdentityResolver};
