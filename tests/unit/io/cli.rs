//! Tests for command-line parsing and file processing

#[cfg(test)]
mod tests {
    use charmatch::ClassificationError;
    use charmatch::classification::coefficient::Coefficient;
    use charmatch::classification::distance::Formula;
    use charmatch::io::cli::{Cli, FileProcessor};
    use charmatch::io::configuration::DEFAULT_DATA_ROOT;
    use charmatch::io::loader::StandardsLoader;
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn data_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        for (directory, name, content) in [
            ("standards", "A.csv", "1,0\n0,1\n"),
            ("standards", "B.csv", "0,1\n1,0\n"),
            ("meta", "A.csv", "1,1\n1,1\n"),
            ("meta", "B.csv", "1,1\n1,1\n"),
        ] {
            let target = dir.path().join(directory);
            fs::create_dir_all(&target).unwrap();
            fs::write(target.join(name), content).unwrap();
        }
        dir
    }

    fn cli_for(root: &Path, target: &Path, extra: &[&str]) -> Cli {
        let mut quiet = vec!["-q"];
        quiet.extend_from_slice(extra);
        verbose_cli_for(root, target, &quiet)
    }

    fn verbose_cli_for(root: &Path, target: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "program".to_string(),
            "-d".to_string(),
            root.display().to_string(),
            "-f".to_string(),
            target.display().to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the required file argument
    // Verified by changing the default data root
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "-f", "input.csv"]);

        assert_eq!(cli.target, PathBuf::from("input.csv"));
        assert_eq!(cli.data_root, PathBuf::from(DEFAULT_DATA_ROOT));
        assert_eq!(cli.formulas(), Formula::ALL.to_vec());
        assert_eq!(cli.coefficients(), Coefficient::ALL.to_vec());
        assert!(cli.should_show_progress());
        assert!(!cli.scores);
    }

    // Tests the file argument is mandatory
    // Verified by giving the target a default value
    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["program"]).is_err());
    }

    // Tests a single formula and the coefficient switch
    // Verified by ignoring the formula option
    #[test]
    fn test_cli_formula_selection() {
        let cli = Cli::parse_from([
            "program",
            "--file",
            "input.csv",
            "--formula",
            "with_arccos",
            "--no-coefficients",
            "--scores",
        ]);

        assert_eq!(cli.formulas(), vec![Formula::ArcCos]);
        assert!(cli.coefficients().is_empty());
        assert!(cli.scores);
    }

    // Tests unknown formula names are rejected at parse time
    // Verified by falling back to all formulas
    #[test]
    fn test_cli_unknown_formula() {
        let result = Cli::try_parse_from(["program", "-f", "x.csv", "--formula", "cosine"]);

        assert!(result.is_err());
    }

    // Tests classifying a file renders the winner and scores
    // Verified by classifying against the inverted standard
    #[test]
    fn test_classify_file() {
        let root = data_root();
        let input = root.path().join("input.csv");
        fs::write(&input, "1,0\n0,1\n").unwrap();

        let cli = cli_for(root.path(), &input, &["--scores", "--formula", "with-module"]);
        let loaded = StandardsLoader::new(root.path()).load().unwrap();
        let processor = FileProcessor::new(cli);
        let text = processor.classify_file(&input, &loaded).unwrap();

        assert_eq!(text.matches("Your character is A").count(), 1);
        assert!(text.contains("[A, A, A, A]"));
        assert!(text.contains("B: 4.0000"));
    }

    // Tests processing a directory classifies every matrix file
    // Verified by stopping after the first file
    #[test]
    fn test_process_directory() {
        let root = data_root();
        let inputs = root.path().join("inputs");
        fs::create_dir_all(&inputs).unwrap();
        fs::write(inputs.join("one.csv"), "1,0\n0,1\n").unwrap();
        fs::write(inputs.join("two.csv"), "0,1\n1,1\n").unwrap();
        fs::write(inputs.join("notes.txt"), "not a matrix").unwrap();

        let mut processor = FileProcessor::new(cli_for(root.path(), &inputs, &[]));

        assert!(processor.process().is_ok());
    }

    // Tests an unreadable input file is a hard failure
    // Verified by skipping unreadable inputs
    #[test]
    fn test_process_missing_input() {
        let root = data_root();
        let missing = root.path().join("missing.csv");

        let mut processor = FileProcessor::new(cli_for(root.path(), &missing, &[]));

        assert!(matches!(
            processor.process().unwrap_err(),
            ClassificationError::MatrixUnavailable { .. }
        ));
    }

    // Tests a directory without matrix files is rejected
    // Verified by succeeding with nothing to do
    #[test]
    fn test_process_empty_directory() {
        let root = data_root();
        let empty = root.path().join("empty");
        fs::create_dir_all(&empty).unwrap();

        let mut processor = FileProcessor::new(cli_for(root.path(), &empty, &[]));

        assert!(matches!(
            processor.process().unwrap_err(),
            ClassificationError::InvalidParameter { .. }
        ));
    }

    // Tests input shapes that differ from the standards abort the run
    // Verified by skipping incompatible standards
    #[test]
    fn test_process_dimension_mismatch() {
        let root = data_root();
        let input = root.path().join("wide.csv");
        fs::write(&input, "1,0,1\n0,1,0\n").unwrap();

        let mut processor = FileProcessor::new(cli_for(root.path(), &input, &[]));

        assert!(matches!(
            processor.process().unwrap_err(),
            ClassificationError::DimensionMismatch { .. }
        ));
    }

    // Tests a data root holding only some letters still classifies with warnings on
    // Verified by failing the run when any standard is missing
    #[test]
    fn test_process_partial_catalog() {
        let root = data_root();
        let input = root.path().join("input.csv");
        fs::write(&input, "0,1\n1,0\n").unwrap();

        let loaded = StandardsLoader::new(root.path()).load().unwrap();
        assert_eq!(loaded.skipped_standards.len(), 24);

        let mut processor = FileProcessor::new(verbose_cli_for(root.path(), &input, &[]));
        assert!(processor.process().is_ok());
    }
}
