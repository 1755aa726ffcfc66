const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

macro_rules! env_or {
    ($key:literal, $default:literal) => {
        option_env!($key).unwrap_or($default)
    };
}

/// Build metadata stamped in by `build.rs`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub branch: &'static str,
    pub commit: &'static str,
    #[serde(skip)]
    pub commit_short: &'static str,
    #[serde(skip)]
    pub build_time: &'static str,
    #[serde(skip)]
    pub profile: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            branch: env_or!("GIT_BRANCH", "unknown"),
            commit: env_or!("GIT_COMMIT", "unknown"),
            commit_short: env_or!("GIT_COMMIT_SHORT", "unknown"),
            build_time: env_or!("BUILD_TIME", "unknown"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }
}

pub fn print_banner(info: &BuildInfo) {
    crate::log_println!();
    crate::log_println!("{GREEN}        _     __               __           {RESET}");
    crate::log_println!("{GREEN} _   __(_)___/ /_______  ___  / /___ ___  __{RESET}");
    crate::log_println!("{GREEN}| | / / / __  / ___/ _ \\/ _ \\/ / __ `/ / / /{RESET}");
    crate::log_println!("{GREEN}| |/ / / /_/ / /  /  __/  __/ / /_/ / /_/ / {RESET}");
    crate::log_println!("{GREEN}|___/_/\\__,_/_/   \\___/\\___/_/\\__,_/\\__, /  {RESET}");
    crate::log_println!("{GREEN}                                   /____/   {RESET}");
    crate::log_println!("{DIM}============================================{RESET}");
    crate::log_println!();

    print_row("Version", info.version, CYAN);
    print_row("Build time", info.build_time, RESET);
    print_row("Branch", info.branch, RESET);
    print_row("Commit", info.commit_short, RESET);
    print_row("Profile", info.profile, YELLOW);
    crate::log_println!();
}

fn print_row(label: &str, value: &str, color: &str) {
    crate::log_println!("  {BOLD}{label:<14}{RESET}{color}{value}{RESET}");
}
