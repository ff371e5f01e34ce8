use crate::error::{Result, VersionizeError};
use crate::git::Vcs;
use git2::{ErrorCode, ObjectType, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Vcs {
    repo: Git2Repo,
}

impl Git2Vcs {
    /// Discover the repository enclosing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            VersionizeError::vcs(format!(
                "no git repository at {}: {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Vcs { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Vcs { repo }
    }

    fn workdir(&self) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| VersionizeError::vcs("repository is bare"))?;
        Ok(workdir.canonicalize()?)
    }

    fn relative_to_workdir(&self, workdir: &Path, path: &Path) -> Result<PathBuf> {
        let absolute = path.canonicalize()?;
        absolute
            .strip_prefix(workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                VersionizeError::vcs(format!(
                    "{} is outside the repository",
                    path.display()
                ))
            })
    }
}

impl Vcs for Git2Vcs {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        let workdir = self.workdir()?;
        let mut index = self.repo.index()?;

        for path in paths {
            let relative = self.relative_to_workdir(&workdir, path)?;
            index.add_path(&relative)?;
        }

        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        tracing::debug!(%oid, commit_message = message, "created commit");
        Ok(())
    }

    fn tag(&self, name: &str) -> Result<()> {
        let target = self.repo.head()?.peel(ObjectType::Commit)?;
        let signature = self.repo.signature()?;

        let oid = self.repo.tag(name, &target, &signature, name, false)?;
        tracing::debug!(%oid, name, "created tag");
        Ok(())
    }
}
