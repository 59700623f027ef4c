fn main() {
    // Embed `git describe` output for the long version string. Builds from a
    // plain source archive simply fall back to the package version.
    let git_output = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok();
    let git_info = git_output
        .as_ref()
        .and_then(|output| std::str::from_utf8(&output.stdout).ok().map(str::trim))
        .filter(|s| !s.is_empty());

    if let Some(git_info) = git_info {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
