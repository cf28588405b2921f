use apollo_compiler::ast;
use schema_patch::Change;
use schema_patch::PatchConfig;

mod directives;
mod integrity;
mod policy;
mod roots;

/// Parses and reprints `sdl`, so that expectations do not depend on formatting.
fn reprint(sdl: &str) -> String {
    ast::Document::parse(sdl, "expected.graphql")
        .unwrap()
        .to_string()
}

/// Applies `changes` with the strict policy and reprints the result.
fn patched(sdl: &str, changes: &[Change]) -> String {
    schema_patch::patch_sdl(sdl, changes, &PatchConfig::strict()).unwrap()
}
