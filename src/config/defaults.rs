//! Default configuration values

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "docker.toml";

/// Build file written when `--output` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "Dockerfile";

/// Parallelism degree baked into the generated `ENV` block
pub const DEFAULT_BUILD_JOBS: usize = 4;

/// Number of release lookups in flight at once
pub const DEFAULT_PARALLEL_RESOLVES: usize = 4;

/// Image every stage derives from
pub const BASE_IMAGE: &str = "ubuntu:24.04";

/// Label of the shared base stage
pub const BASE_STAGE: &str = "base";

/// Packages installed into the base stage
pub const BASE_PACKAGES: &[&str] = &[
    "build-essential",
    "cmake",
    "git",
    "libboost-all-dev",
    "libeigen3-dev",
    "libpython3-dev",
    "libqhull-dev",
    "liburdfdom-dev",
    "libtinyxml-dev",
    "python-is-python3",
    "python3-numpy",
    "python3-scipy",
];

/// Install prefix copied between stages
pub const INSTALL_PREFIX: &str = "/usr/local";

/// Archive path remote sources are fetched into
pub const SOURCE_ARCHIVE: &str = "/src.tar.gz";

/// CMake option emitted before the project flags
pub const LEADING_CMAKE_OPTIONS: &[&str] = &["-DCMAKE_INSTALL_LIBDIR=lib"];

/// CMake options always emitted after the project flags
pub const TRAILING_CMAKE_OPTIONS: &[&str] = &["-DPYTHON_DEB_LAYOUT=ON", "-Wno-dev"];

/// Total timeout for one release lookup (in seconds)
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for release lookups (in seconds)
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
