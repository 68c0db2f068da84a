mod files;
mod generate;

pub use files::{
    FileKind, GeneratedFile, GeneratedFileSet, GenerationScope, WriteOptions, WriteSummary,
};
pub use generate::{generate_module_files, generate_module_files_from_items, info_file, InfoFile};
