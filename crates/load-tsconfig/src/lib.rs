//! Find and load `tsconfig.json` files, following their `extends` chains.
//!
//! Given a starting directory, the loader walks ancestor directories to find
//! the nearest config file, recursively resolves everything it extends, and
//! returns a single merged configuration together with the ordered list of
//! files that contributed to it.
//!
//! ## Reference resolution
//!
//! An `extends` target can be:
//! - an absolute path, used as-is;
//! - a `./` or `../` relative path, resolved against the extending file's
//!   directory;
//! - a package specifier such as `"tsconfig-pkg-a"` or
//!   `"@acme/tsconfig/node18"`, resolved through `node_modules` with the
//!   usual tsconfig conventions (manifest `tsconfig` field, implicit
//!   `tsconfig.json`).
//!
//! ## Merge semantics
//!
//! Later configs win at the top level. `compilerOptions` is merged
//! key-by-key, so a child overriding `paths` does not wipe out a parent's
//! `strict`. `compilerOptions.baseUrl` is rewritten to an absolute path
//! against the directory of the file that declared it. The merged data
//! never contains an `extends` key.
//!
//! ## Failure policy
//!
//! A reference that resolves to nothing is skipped silently, and malformed
//! JSONC degrades to an empty object (the file still appears in `files`).
//! Only genuine faults — malformed package specifiers, I/O failures other
//! than not-found, cyclic `extends` chains — surface as errors.
//!
//! ```no_run
//! use load_tsconfig::load_tsconfig;
//!
//! # fn main() -> load_tsconfig::Result<()> {
//! if let Some(loaded) = load_tsconfig("path/to/project", None)? {
//!     println!("merged {} config file(s)", loaded.files.len());
//!     println!("compilerOptions: {:?}", loaded.data.get("compilerOptions"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod find_up;
mod jsonc;
pub mod loader;
mod merge;
mod paths;
pub mod reference;
mod resolver;

pub use error::{Result, TsconfigError};
pub use find_up::find_up;
pub use loader::{DEFAULT_CONFIG_NAME, Loaded, load_tsconfig};
pub use reference::ConfigReference;
