//! run-msbuild command integration tests.

use filetime::FileTime;
use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn successful_build_writes_rule_and_stamp() {
  let env = TestEnv::new();
  let program = env.write_file("glue/Program.cs", "class P {}\n");
  let spaced = env.write_file("glue/My Types.cs", "class T {}\n");
  env.set_deps(&[&program, &spaced]);

  env.msbuild_cmd("run-msbuild").assert().success();

  let rule = std::fs::read_to_string(env.depfile()).unwrap();
  let expected = format!(
    "{}: {} {}\n",
    env.stamp().display(),
    program.display(),
    spaced.display().to_string().replace(' ', "\\ ")
  );
  assert_eq!(rule, expected);
  assert!(env.stamp().exists());
}

#[test]
fn passes_project_targets_and_list_property() {
  let env = TestEnv::new();
  env.set_deps(&[]);

  env
    .msbuild_cmd("run-msbuild")
    .args(["--targets", "Restore", "Build", "--", "/p:Configuration=Release"])
    .assert()
    .success();

  let args = env.msbuild_args();
  let list_property = format!("/p:MesonDepListPath={}.list.txt", env.depfile().display());
  assert_eq!(
    args,
    vec![
      env.project().display().to_string(),
      "/t:Restore,Build,WriteMesonDepList".to_string(),
      "/p:Configuration=Release".to_string(),
      list_property,
    ]
  );
}

#[test]
fn failed_build_propagates_exit_code() {
  let env = TestEnv::new();
  env.set_exit_code(3);

  env
    .msbuild_cmd("run-msbuild")
    .assert()
    .code(3)
    .stderr(predicate::str::contains("exit code 3"));

  assert!(!env.stamp().exists());
  assert!(!env.depfile().exists());
}

#[test]
fn unchanged_rule_keeps_depfile_mtime() {
  let env = TestEnv::new();
  let program = env.write_file("glue/Program.cs", "class P {}\n");
  env.set_deps(&[&program]);

  env.msbuild_cmd("run-msbuild").assert().success();
  let old = FileTime::from_unix_time(1_000_000, 0);
  filetime::set_file_mtime(env.depfile(), old).unwrap();

  env.msbuild_cmd("run-msbuild").assert().success();

  let meta = std::fs::metadata(env.depfile()).unwrap();
  assert_eq!(FileTime::from_last_modification_time(&meta), old);
}

#[test]
fn stale_list_is_removed_before_building() {
  let env = TestEnv::new();
  let stale = env.write_file("glue.d.list.txt", "/stale/Old.cs\n");
  env.set_exit_code(1);

  env.msbuild_cmd("run-msbuild").assert().code(1);

  assert!(!stale.exists());
}
