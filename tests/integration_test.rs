use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use git2::{Repository, Signature};
use headlint::cli::check::CheckCommand;
use headlint::config::{IssueConfig, LintConfig, REPO_CONFIG_FILE};
use headlint::data::{CheckKind, CheckReport};
use headlint::issue::{NO_HOST_MESSAGE, UNSUPPORTED_HOST_MESSAGE};
use headlint::mood::{PosTagger, TaggedToken};
use headlint::vcs::{Backend, CommitSource, GitRepository};
use headlint::{Linter, LintError};
use tempfile::TempDir;

/// Test setup that creates a temporary git repository with test commits
struct TestRepo {
    _temp_dir: TempDir,
    repo_path: PathBuf,
    repo: Repository,
    commits: Vec<git2::Oid>,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();

        let repo = Repository::init(&repo_path)?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok(TestRepo {
            _temp_dir: temp_dir,
            repo_path,
            repo,
            commits: Vec::new(),
        })
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.repo.remote(name, url)?;
        Ok(())
    }

    fn add_commit(&mut self, message: &str) -> Result<git2::Oid> {
        let file_path = self.repo_path.join("test.txt");
        fs::write(&file_path, format!("commit {}", self.commits.len()))?;

        let mut index = self.repo.index()?;
        index.add_path(std::path::Path::new("test.txt"))?;
        index.write()?;

        let signature = Signature::now("Test User", "test@example.com")?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent_commit = match self.commits.last() {
            Some(last_commit_id) => Some(self.repo.find_commit(*last_commit_id)?),
            None => None,
        };
        let parents: Vec<&git2::Commit> = parent_commit.iter().collect();

        let commit_id = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        self.commits.push(commit_id);
        Ok(commit_id)
    }

    fn lint(&self, config: LintConfig) -> Result<CheckReport> {
        let source = GitRepository::open_at(&self.repo_path)?;
        Ok(Linter::new(config)?.check(&source)?)
    }
}

/// Mercurial stand-in serving a fixed message and remotes.
struct FakeHg {
    message: String,
    remotes: Vec<String>,
}

impl FakeHg {
    fn new(message: &str, remotes: &[&str]) -> Self {
        Self {
            message: message.to_string(),
            remotes: remotes.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl CommitSource for FakeHg {
    fn backend(&self) -> Backend {
        Backend::Mercurial
    }

    fn head_message(&self) -> Result<String, LintError> {
        Ok(self.message.clone())
    }

    fn remote_urls(&self) -> Result<Vec<String>, LintError> {
        Ok(self.remotes.clone())
    }
}

fn issues_config(issues: IssueConfig) -> LintConfig {
    LintConfig {
        issues,
        ..LintConfig::default()
    }
}

fn close_issue() -> IssueConfig {
    IssueConfig {
        close_issue: true,
        ..IssueConfig::default()
    }
}

fn messages(report: &CheckReport) -> Vec<&str> {
    report.findings.iter().map(|f| f.message.as_str()).collect()
}

#[test]
fn clean_commit_passes() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_commit("Add the first feature\n\nExplain why it is needed.\n")?;

    let report = repo.lint(LintConfig::default())?;
    assert!(report.passes, "unexpected findings: {:?}", report.findings);
    assert_eq!(report.exit_code(), 0);
    Ok(())
}

#[test]
fn only_head_commit_is_checked() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_commit("Added a broken shortlog.")?;
    repo.add_commit("Add a good one")?;

    assert!(repo.lint(LintConfig::default())?.passes);
    Ok(())
}

#[test]
fn shortlog_and_body_findings() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_commit(&format!(
        "WIP: Added a very long shortlog that goes past the limit\n\n{}\n",
        "x".repeat(80)
    ))?;

    let report = repo.lint(LintConfig::default())?;
    assert_eq!(
        messages(&report),
        vec![
            "Shortlog of the HEAD commit contains 56 character(s). \
             This is 6 character(s) longer than the limit (56 > 50).",
            "Shortlog of HEAD commit isn't in imperative mood! Bad words are 'Added'",
            "Body of HEAD commit contains too long lines. \
             Commit body lines should not exceed 72 characters.",
        ]
    );
    assert_eq!(report.count(CheckKind::Shortlog), 2);
    assert_eq!(report.exit_code(), 1);
    Ok(())
}

/// Tags every first word as past tense.
struct PastTenseTagger;

impl PosTagger for PastTenseTagger {
    fn tag_first_sentence(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|word| TaggedToken::new(word, "VBD"))
            .collect()
    }
}

#[test]
fn custom_tagger_sees_subject_after_first_topic() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_commit("cli: Fix parser: added\n\nExplain the fix.\n")?;

    assert!(repo.lint(LintConfig::default())?.passes);

    let source = GitRepository::open_at(&repo.repo_path)?;
    let report = Linter::new(LintConfig::default())?
        .with_tagger(Box::new(PastTenseTagger))
        .check(&source)?;
    assert_eq!(
        messages(&report),
        vec!["Shortlog of HEAD commit isn't in imperative mood! Bad words are 'Fix'"]
    );
    Ok(())
}

#[test]
fn github_issue_references() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_remote("origin", "git@github.com:coala/coala.git")?;
    repo.add_commit("Add feature\n\nFixes #12, #012 and #x")?;

    let report = repo.lint(issues_config(close_issue()))?;
    assert_eq!(
        messages(&report),
        vec!["Invalid issue number: #012", "Invalid issue number: #x"]
    );
    assert!(report.findings.iter().all(|f| f.check == CheckKind::Issue));
    Ok(())
}

#[test]
fn github_full_url_references() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_remote("origin", "https://github.com/coala/coala.git")?;
    repo.add_commit(
        "Add feature\n\nCloses https://github.com/coala/coala/issues/1112\n\
         and https://gitlab.com/coala/coala/issues/3",
    )?;

    let report = repo.lint(issues_config(IssueConfig {
        full_url: true,
        ..close_issue()
    }))?;
    assert_eq!(
        messages(&report),
        vec!["Invalid full issue reference: https://gitlab.com/coala/coala/issues/3"]
    );
    Ok(())
}

#[test]
fn first_remote_in_config_order_decides_the_host() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_remote("upstream", "git@gitlab.com:coala/coala.git")?;
    repo.add_remote("origin", "git@github.com:someone/coala.git")?;
    // Only GitLab understands the progressive form.
    repo.add_commit("Add feature\n\nFixing #4")?;

    let report = repo.lint(issues_config(IssueConfig {
        enforce_reference: true,
        ..close_issue()
    }))?;
    assert!(report.passes, "unexpected findings: {:?}", report.findings);
    Ok(())
}

#[test]
fn git_is_silent_without_supported_host() -> Result<()> {
    let strict = IssueConfig {
        enforce_reference: true,
        full_url: true,
        ..close_issue()
    };

    let mut no_remote = TestRepo::new()?;
    no_remote.add_commit("Add feature\n\nFixes #0")?;
    assert!(no_remote.lint(issues_config(strict.clone()))?.passes);

    let mut savannah = TestRepo::new()?;
    savannah.add_remote("origin", "https://git.savannah.gnu.org/git/emacs.git")?;
    savannah.add_commit("Add feature\n\nFixes #0")?;
    assert!(savannah.lint(issues_config(strict))?.passes);
    Ok(())
}

#[test]
fn missing_reference_in_last_line() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_remote("origin", "git@github.com:coala/coala.git")?;
    repo.add_commit("Add feature\n\nFixes #3\nMore details follow here.")?;

    let report = repo.lint(issues_config(IssueConfig {
        last_line_only: true,
        enforce_reference: true,
        ..close_issue()
    }))?;
    assert_eq!(
        messages(&report),
        vec!["Body of HEAD commit does not contain any issue reference in the last line."]
    );
    Ok(())
}

#[test]
fn empty_repository_is_an_operational_error() -> Result<()> {
    let repo = TestRepo::new()?;
    let err = repo.lint(LintConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("git:"), "{err}");
    Ok(())
}

#[test]
fn check_command_reads_repository_config() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_remote("origin", "git@github.com:coala/coala.git")?;
    repo.add_commit("Add feature.\n\nResolves #0")?;
    fs::write(
        repo.repo_path.join(REPO_CONFIG_FILE),
        "shortlog:\n  trailing_period: false\nissues:\n  close_issue: true\n",
    )?;

    let command = CheckCommand {
        path: Some(repo.repo_path.clone()),
        ..CheckCommand::default()
    };
    let report = command.run()?;
    assert_eq!(
        messages(&report),
        vec![
            "Shortlog of HEAD commit contains a period at end.",
            "Invalid issue number: #0",
        ]
    );
    Ok(())
}

#[test]
fn check_command_flags_override_repository_config() -> Result<()> {
    let mut repo = TestRepo::new()?;
    repo.add_commit("Add feature")?;
    fs::write(repo.repo_path.join(REPO_CONFIG_FILE), "body:\n  force_body: false\n")?;

    let command = CheckCommand {
        path: Some(repo.repo_path.clone()),
        force_body: true,
        ..CheckCommand::default()
    };
    assert_eq!(
        messages(&command.run()?),
        vec!["No commit message body at HEAD."]
    );
    Ok(())
}

#[test]
fn check_command_rejects_invalid_regex_before_reading() -> Result<()> {
    // No commit: reading HEAD would fail, the regex error must come first.
    let repo = TestRepo::new()?;
    let command = CheckCommand {
        path: Some(repo.repo_path.clone()),
        shortlog_regex: Some("(".to_string()),
        ..CheckCommand::default()
    };
    let err = command.run().unwrap_err();
    assert!(err.to_string().contains("Invalid lint configuration"), "{err}");
    Ok(())
}

#[test]
fn mercurial_bitbucket_full_urls() -> Result<()> {
    let source = FakeHg::new(
        "Add feature\n\nFirst line, blablablablablabla.\n\
         Closing https://bitbucket.org/usr/rep/issues/1232/name\n\
         and https://bitbucket.org/usr/rep/issues/not_num/test\n",
        &["ssh://hg@bitbucket.org/usr/rep"],
    );
    let config = LintConfig {
        backend: Backend::Mercurial,
        ..issues_config(IssueConfig {
            full_url: true,
            ..close_issue()
        })
    };

    let report = Linter::new(config)?.check(&source)?;
    assert_eq!(report.backend, Backend::Mercurial);
    assert_eq!(
        messages(&report),
        vec!["Invalid issue number: https://bitbucket.org/usr/rep/issues/not_num/test"]
    );
    Ok(())
}

#[test]
fn mercurial_reports_host_problems() -> Result<()> {
    let config = issues_config(close_issue());

    let no_paths = FakeHg::new("Add feature\n\nFixes #1", &[]);
    let report = Linter::new(config.clone())?.check(&no_paths)?;
    assert_eq!(messages(&report), vec![NO_HOST_MESSAGE]);

    let savannah = FakeHg::new(
        "Add feature\n\nCloses #1112",
        &["http://hg.sv.gnu.org/hgweb/project"],
    );
    let report = Linter::new(config.clone())?.check(&savannah)?;
    assert_eq!(messages(&report), vec![UNSUPPORTED_HOST_MESSAGE]);

    let https_user = FakeHg::new(
        "Add feature\n\nFixes #1",
        &["https://user@bitbucket.org/usr/rep"],
    );
    assert!(Linter::new(config)?.check(&https_user)?.passes);
    Ok(())
}

#[test]
fn mercurial_host_problems_do_not_stop_other_checks() -> Result<()> {
    let source = FakeHg::new("Added feature.\n\nFixes #1", &[]);
    let report = Linter::new(issues_config(close_issue()))?.check(&source)?;
    assert_eq!(
        messages(&report),
        vec![
            "Shortlog of HEAD commit isn't in imperative mood! Bad words are 'Added'",
            NO_HOST_MESSAGE,
        ]
    );
    Ok(())
}
