// Data structure file generator: selects snippets by flag, concatenates them
// under a shared preamble and appends an example driver

pub mod app;
mod assembler;
mod assets;
mod catalog;
mod code_writer;
mod config;
mod console;
mod error;
pub mod example;
pub mod selector;
mod utils;

pub use app::{App, Outcome};
pub use assembler::{generate_file, load_bodies, open_output, Assembler, PREAMBLE_INCLUDES};
pub use assets::{AssetBody, AssetLoader, AssetSource, DirAssets, EmbeddedAssets, ASSET_EXTENSION};
pub use catalog::{Catalog, CategoryGroup, ItemDescriptor};
pub use code_writer::CodeWriter;
pub use config::{format_timestamp, Clock, Config, FixedClock, SystemClock, SNIPPETS_DIR_ENV};
pub use console::Console;
pub use error::{GenError, Result};
pub use example::write_example_driver;
pub use selector::{parse_invocation, select, Invocation, Selection};
pub use utils::{to_instance_name, to_type_name};
