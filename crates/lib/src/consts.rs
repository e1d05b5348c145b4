/// Suffix appended to the absolute depfile path to get the list file MSBuild writes.
pub const DEPLIST_SUFFIX: &str = ".list.txt";

/// MSBuild target that writes the dependency list.
pub const DEPLIST_TARGET: &str = "WriteMesonDepList";

/// MSBuild property holding the path the dependency list is written to.
pub const DEPLIST_PROPERTY: &str = "MesonDepListPath";

/// Removed from the child environment; set by the Developer Command Prompt for VS and
/// picked up by MSBuild as the solution platform.
pub const PLATFORM_ENV_VAR: &str = "PLATFORM";

pub const VSWHERE_REQUIRED_COMPONENT: &str = "Microsoft.Component.MSBuild";
