//! Built-in validity rules for the experimental settings group.

use kaws_types::{bail, Experimental, ExperimentalValidator, Result, TaintEffect};

/// Longest drain, in minutes, the node drainer may wait for.
pub const MAX_DRAIN_TIMEOUT_MINUTES: u32 = 60;

/// The experimental rules kaws applies to every cluster.yaml.
///
/// - every taint needs a key and one of the three Kubernetes effects
/// - an enabled node drainer needs a drain timeout of 1 to 60 minutes
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardExperimentalRules;

impl ExperimentalValidator for StandardExperimentalRules {
    fn validate(&self, experimental: &Experimental) -> Result<()> {
        for taint in &experimental.taints {
            if taint.key.is_empty() {
                bail!(Experimental, "expected taint key to be a non-empty string");
            }
            taint.effect.parse::<TaintEffect>()?;
        }

        let drainer = &experimental.node_drainer;
        if drainer.enabled
            && !(1..=MAX_DRAIN_TIMEOUT_MINUTES).contains(&drainer.drain_timeout)
        {
            bail!(
                Experimental,
                "Drain timeout must be an integer between 1 and {}, but was {}",
                MAX_DRAIN_TIMEOUT_MINUTES,
                drainer.drain_timeout
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaws_types::{KawsError, NodeDrainer, Taint};

    fn taint(key: &str, effect: &str) -> Taint {
        Taint { key: key.into(), value: "v".into(), effect: effect.into() }
    }

    #[test]
    fn test_default_experimental_is_valid() {
        assert!(StandardExperimentalRules.validate(&Experimental::default()).is_ok());
    }

    #[test]
    fn test_taints() {
        let mut e = Experimental::default();
        e.taints = vec![taint("reservation", "NoSchedule"), taint("spot", "NoExecute")];
        assert!(StandardExperimentalRules.validate(&e).is_ok());

        e.taints = vec![taint("", "NoSchedule")];
        assert!(matches!(StandardExperimentalRules.validate(&e), Err(KawsError::Experimental(_))));

        e.taints = vec![taint("reservation", "Evict")];
        let err = StandardExperimentalRules.validate(&e).unwrap_err();
        assert!(err.to_string().contains("invalid taint effect: Evict"));
    }

    #[test]
    fn test_node_drainer_timeout() {
        let mut e = Experimental::default();
        e.node_drainer = NodeDrainer { enabled: true, drain_timeout: 5 };
        assert!(StandardExperimentalRules.validate(&e).is_ok());

        e.node_drainer.drain_timeout = 0;
        assert!(StandardExperimentalRules.validate(&e).is_err());

        e.node_drainer.drain_timeout = 61;
        let err = StandardExperimentalRules.validate(&e).unwrap_err();
        assert_eq!(err.to_string(), "Drain timeout must be an integer between 1 and 60, but was 61");

        e.node_drainer.enabled = false;
        assert!(StandardExperimentalRules.validate(&e).is_ok());
    }
}
