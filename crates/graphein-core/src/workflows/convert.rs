use crate::core::io::pdb::{PdbError, PdbFile};
use crate::core::io::traits::StructureFile;
use crate::graph::builder::{self, GraphError};
use crate::graph::config::{ConfigError, GraphConfig};
use crate::graph::serialize;
use crate::workflows::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Suffix appended to the input file stem to form the artifact name.
pub const GRAPH_SUFFIX: &str = "_graph.json";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to parse '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Failed to build graph for '{path}': {source}", path = path.display())]
    Graph {
        path: PathBuf,
        #[source]
        source: GraphError,
    },

    #[error("Failed to serialize graph for '{path}': {source}", path = path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of one batch run: which inputs produced artifacts and which failed.
///
/// Entries appear in input order. A failure never removes other files from the
/// batch; the two lists together always account for every input.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len()
    }
}

/// Derives the artifact path for an input structure file: a sibling path with
/// the same stem and the fixed `_graph.json` suffix (`a/b.pdb` becomes
/// `a/b_graph.json`).
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("structure"));
    name.push(GRAPH_SUFFIX);
    input.with_file_name(name)
}

// The rename makes artifact creation atomic on the same filesystem, so an
// aborted run never leaves a partial artifact under the final name.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Runs the full pipeline for one structure file: parse, build, serialize,
/// atomic write. Returns the artifact path on success.
///
/// # Errors
///
/// Returns [`ConvertError::Config`] for an invalid cutoff and a per-file
/// variant naming the offending path for everything else.
pub fn convert_file(input: &Path, config: &GraphConfig) -> Result<PathBuf, ConvertError> {
    config.validate()?;

    debug!("Parsing structure {}", input.display());
    let atoms = PdbFile::read_from_path(input).map_err(|source| ConvertError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let graph = builder::build(&atoms, config).map_err(|source| ConvertError::Graph {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(
        "Built graph for {}: {} node(s), {} edge(s)",
        input.display(),
        graph.node_count(),
        graph.edge_count()
    );

    let bytes = serialize::to_json_bytes(&graph).map_err(|source| ConvertError::Serialize {
        path: input.to_path_buf(),
        source,
    })?;

    let output = output_path(input);
    write_atomically(&output, &bytes).map_err(|source| ConvertError::Io {
        path: output.clone(),
        source,
    })?;
    debug!("Wrote graph artifact {}", output.display());

    Ok(output)
}

/// Converts a batch of structure files in parallel, isolating per-file
/// failures so one bad input never aborts the rest of the batch.
///
/// The configuration is validated before any file is touched; an invalid
/// cutoff is a batch-level error because it would invalidate every output.
/// File pipelines share nothing mutable, so they run on the rayon pool as
/// independent tasks.
///
/// # Errors
///
/// Returns [`ConvertError::Config`] for an invalid cutoff. Per-file errors are
/// recorded in the returned [`BatchReport`], not propagated.
pub fn convert_batch(
    inputs: &[PathBuf],
    config: &GraphConfig,
    reporter: &ProgressReporter,
) -> Result<BatchReport, ConvertError> {
    config.validate().map_err(ConvertError::Config)?;

    info!(
        "Converting {} structure file(s) with cutoff {} A",
        inputs.len(),
        config.cutoff
    );
    reporter.report(Progress::TaskStart {
        total_steps: inputs.len() as u64,
    });

    let results: Vec<(PathBuf, Result<PathBuf, ConvertError>)> = inputs
        .par_iter()
        .map(|input| {
            let result = convert_file(input, config);
            reporter.report(Progress::TaskIncrement);
            (input.clone(), result)
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut report = BatchReport::default();
    for (input, result) in results {
        match result {
            Ok(output) => report.converted.push((input, output)),
            Err(error) => {
                warn!("Failed to convert {}: {}", input.display(), error);
                report.failures.push((input, error));
            }
        }
    }

    info!(
        "Batch finished: {} converted, {} failed",
        report.converted.len(),
        report.failures.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn atom_line(serial: usize, element: &str, pos: (f64, f64, f64)) -> String {
        format!(
            "{:<6}{:>5} {:<4}{:1}{:<3} {:1}{:>4}{:1}   {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
            "ATOM", serial, element, " ", "LIG", 'A', 1, " ", pos.0, pos.1, pos.2, 1.00, 0.00,
            element
        )
    }

    fn write_triplet_pdb(dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let content = [
            atom_line(1, "C", (0.0, 0.0, 0.0)),
            atom_line(2, "C", (1.5, 0.0, 0.0)),
            atom_line(3, "O", (10.0, 0.0, 0.0)),
            "END".to_string(),
        ]
        .join("\n");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn output_path_replaces_structure_suffix_with_graph_suffix() {
        assert_eq!(
            output_path(Path::new("structures/1abc.pdb")),
            PathBuf::from("structures/1abc_graph.json")
        );
        assert_eq!(
            output_path(Path::new("no_extension")),
            PathBuf::from("no_extension_graph.json")
        );
    }

    #[test]
    fn convert_file_writes_artifact_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_triplet_pdb(dir.path(), "mol.pdb");

        let output = convert_file(&input, &GraphConfig::default()).unwrap();
        assert_eq!(output, dir.path().join("mol_graph.json"));

        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"].as_array().unwrap().len(), 1);
        assert_eq!(value["edges"][0]["distance"], 1.5);

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|n| n.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn converting_the_same_file_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_triplet_pdb(dir.path(), "mol.pdb");

        let output = convert_file(&input, &GraphConfig::default()).unwrap();
        let first = fs::read(&output).unwrap();
        convert_file(&input, &GraphConfig::default()).unwrap();
        let second = fs::read(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batch_isolates_per_file_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good1 = write_triplet_pdb(dir.path(), "good1.pdb");
        let bad = dir.path().join("bad.pdb");
        fs::write(&bad, "ATOM      1  C   LIG A   1      xx.xxx").unwrap();
        let good2 = write_triplet_pdb(dir.path(), "good2.pdb");

        let inputs = vec![good1.clone(), bad.clone(), good2.clone()];
        let report =
            convert_batch(&inputs, &GraphConfig::default(), &ProgressReporter::new()).unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, bad);
        assert!(matches!(
            report.failures[0].1,
            ConvertError::Parse { .. }
        ));

        assert!(dir.path().join("good1_graph.json").exists());
        assert!(dir.path().join("good2_graph.json").exists());
        assert!(!dir.path().join("bad_graph.json").exists());
    }

    #[test]
    fn empty_structure_file_is_a_recorded_failure() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.pdb");
        fs::write(&empty, "").unwrap();

        let report = convert_batch(
            &[empty.clone()],
            &GraphConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(report.converted.is_empty());
        assert!(matches!(
            &report.failures[0].1,
            ConvertError::Parse {
                source: PdbError::EmptyStructure,
                ..
            }
        ));
    }

    #[test]
    fn invalid_cutoff_aborts_the_batch_before_any_file_is_processed() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_triplet_pdb(dir.path(), "mol.pdb");

        let err = convert_batch(
            &[input],
            &GraphConfig::new(-1.0),
            &ProgressReporter::new(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::Config(ConfigError::InvalidCutoff(_))
        ));
        assert!(!dir.path().join("mol_graph.json").exists());
    }

    #[test]
    fn batch_reports_progress_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let inputs: Vec<_> = (0..3)
            .map(|i| write_triplet_pdb(dir.path(), &format!("mol{}.pdb", i)))
            .collect();

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        convert_batch(&inputs, &GraphConfig::default(), &reporter).unwrap();

        let events = events.lock().unwrap();
        assert!(matches!(events[0], Progress::TaskStart { total_steps: 3 }));
        let increments = events
            .iter()
            .filter(|e| matches!(e, Progress::TaskIncrement))
            .count();
        assert_eq!(increments, 3);
        assert!(matches!(events.last(), Some(Progress::TaskFinish)));
    }

    #[test]
    fn missing_input_file_is_an_io_failure_for_that_file() {
        let report = convert_batch(
            &[PathBuf::from("/nonexistent/structure.pdb")],
            &GraphConfig::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            &report.failures[0].1,
            ConvertError::Parse {
                source: PdbError::Io(_),
                ..
            }
        ));
    }
}
