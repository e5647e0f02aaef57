use anyhow::Context;
use kapsel_verify::verify_file;

use super::app::VerifyArg;

impl VerifyArg {
    pub fn run(self) -> anyhow::Result<()> {
        verify_file(&self.file, self.hash, &self.expected)
            .with_context(|| format!("{} failed {} verification", self.file.display(), self.hash))?;
        tracing::info!(path = %self.file.display(), algorithm = %self.hash, "digest matches");
        println!("{}: OK", self.file.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kapsel_verify::HashAlgorithm;
    use tempfile::tempdir;

    #[test]
    fn test_verify_command() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hello.txt");
        std::fs::write(&file, "hello world").unwrap();

        let ok = VerifyArg {
            file:     file.clone(),
            hash:     HashAlgorithm::Md5,
            expected: "5EB63BBBE01EEED093CB22BB8F5ACDC3".into(),
        };
        ok.run().unwrap();

        let bad = VerifyArg {
            file,
            hash: HashAlgorithm::Md5,
            expected: "00".into(),
        };
        let err = bad.run().unwrap_err();
        assert!(err.to_string().contains("failed md5 verification"));
    }
}
