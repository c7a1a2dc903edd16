/// Integration tests for the lint CLI
///
/// Directory structure inspired by:
/// https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
///
/// Resolves problems with:
/// - Compilation times, by only having 1 integration test binary
/// - Dead code analysis of integration test helpers https://github.com/rust-lang/rust/issues/46379
mod discovery;
mod fix;
mod help;
mod helpers;
mod lint;
mod output_format;
