// Command-line Test Modules
//
// End-to-end runs of the binary live in tests/cli.rs.
