//! glue-version command integration tests.

use filetime::FileTime;

use super::common::TestEnv;

#[test]
fn writes_header_with_newest_dependency_mtime() {
  let env = TestEnv::new();
  let older = env.write_file("glue/Older.cs", "");
  let newer = env.write_file("glue/Newer.cs", "");
  filetime::set_file_mtime(&older, FileTime::from_unix_time(1_600_000_000, 0)).unwrap();
  filetime::set_file_mtime(&newer, FileTime::from_unix_time(1_700_000_000, 0)).unwrap();
  env.set_deps(&[&older, &newer]);

  env.msbuild_cmd("glue-version").assert().success();

  let header = std::fs::read_to_string(env.stamp()).unwrap();
  assert!(header.starts_with("/* THIS FILE IS GENERATED DO NOT EDIT */\n"));
  assert!(header.contains("#define CS_GLUE_VERSION UINT32_C(1700000000)\n"));
  assert!(env.depfile().exists());
}

#[test]
fn empty_dependency_list_gives_version_zero() {
  let env = TestEnv::new();
  env.set_deps(&[]);

  env.msbuild_cmd("glue-version").assert().success();

  let header = std::fs::read_to_string(env.stamp()).unwrap();
  assert!(header.contains("UINT32_C(0)"));
}

#[test]
fn failed_build_leaves_header_untouched() {
  let env = TestEnv::new();
  env.set_exit_code(2);

  env.msbuild_cmd("glue-version").assert().code(2);

  assert!(!env.stamp().exists());
}
