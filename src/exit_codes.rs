//! Standard exit codes for packinstr binaries

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Input rejected while constructing a packing instruction
pub const EXIT_VALIDATION_ERROR: i32 = 102;

/// Rendered message could not be encoded in the requested format
pub const EXIT_ENCODING_ERROR: i32 = 103;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (stdout closed, disk error)
pub const EXIT_IO_ERROR: i32 = 106;
