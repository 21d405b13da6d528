//! Strategy selection logic.

use std::sync::Arc;

use matmul_core::{ConfigError, Multiplier, MultiplierFactory};

use crate::error::BenchError;

/// Resolve an algorithm selection into the multipliers to run.
///
/// Accepts `all`, a single registry name, or a comma-separated list.
/// Duplicate names are run once.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, BenchError> {
    let names: Vec<&str> = match algo.trim() {
        "all" => factory.available(),
        list => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
    };

    if names.is_empty() {
        return Err(ConfigError::UnknownStrategy(algo.to_string()).into());
    }

    let mut seen = Vec::with_capacity(names.len());
    let mut multipliers = Vec::with_capacity(names.len());
    for name in names {
        let m = factory.get(name)?;
        if seen.iter().any(|s: &String| s == m.name()) {
            continue;
        }
        seen.push(m.name().to_string());
        multipliers.push(m);
    }
    Ok(multipliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matmul_core::DefaultFactory;

    fn names(ms: &[Arc<dyn Multiplier>]) -> Vec<String> {
        ms.iter().map(|m| m.name().to_string()).collect()
    }

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let ms = get_multipliers_to_run("all", &factory).unwrap();
        assert_eq!(
            names(&ms),
            ["Naive", "Delegated", "Strassen", "ParallelStrassen"]
        );
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let ms = get_multipliers_to_run("strassen", &factory).unwrap();
        assert_eq!(names(&ms), ["Strassen"]);
    }

    #[test]
    fn select_list_dedups_aliases() {
        let factory = DefaultFactory::new();
        let ms = get_multipliers_to_run("naive, blas,delegated", &factory).unwrap();
        assert_eq!(names(&ms), ["Naive", "Delegated"]);
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let err = get_multipliers_to_run("naive,winograd", &factory).err();
        assert!(matches!(
            err,
            Some(BenchError::Config(ConfigError::UnknownStrategy(name))) if name == "winograd"
        ));
    }

    #[test]
    fn select_empty() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            get_multipliers_to_run(" , ", &factory),
            Err(BenchError::Config(_))
        ));
    }
}
