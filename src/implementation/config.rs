// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the configuration of a resolution: which frontier is
//! used, which dominance filter, which seeding heuristic and so on.

use std::{fmt, str::FromStr, time::Duration};

use derive_builder::Builder;

use crate::{Grasp, Greedy, InitialBoundProvider, NoProvider};

/// The order in which the search tree is explored
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Stack based: one branch is explored to completion before backtracking
    DepthFirst,
    /// Priority queue: the node with the highest bound is explored first
    #[default]
    BestFirst,
}

/// The dominance filter applied to the partial selections
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DominanceRule {
    /// Each subset is only reached through its increasing insertion order
    #[default]
    Canonical,
    /// The weakest selected point must not be weaker than any other point.
    /// This filter may discard the optimum.
    TotalDistance,
    /// No dominance pruning at all
    Disabled,
}

/// The heuristic used to seed the initial lower bound
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    #[default]
    Greedy,
    Grasp { iterations: usize, rcl_size: usize, seed: u64 },
    None,
}
impl ProviderKind {
    /// Instantiates the configured provider
    pub fn build(self) -> Box<dyn InitialBoundProvider> {
        match self {
            ProviderKind::Greedy => Box::new(Greedy),
            ProviderKind::Grasp { iterations, rcl_size, seed } => Box::new(Grasp::new(iterations, rcl_size, seed)),
            ProviderKind::None => Box::new(NoProvider),
        }
    }
}

/// This is how you configure a resolution.
///
/// # Example
/// ```
/// # use maxdiv::*;
/// let config = SolverConfigBuilder::default()
///     .strategy(Strategy::DepthFirst)
///     .provider(ProviderKind::None)
///     .build()
///     .unwrap();
/// assert_eq!(DominanceRule::Canonical, config.dominance);
/// assert!(config.eager_pruning);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SolverConfig {
    /// The exploration order (best-first by default)
    #[builder(default)]
    pub strategy: Strategy,
    /// The dominance filter (canonical order by default)
    #[builder(default)]
    pub dominance: DominanceRule,
    /// When true (default), the children that are dominated or whose bound
    /// cannot beat the incumbent are discarded before they enter the fringe
    #[builder(default = "true")]
    pub eager_pruning: bool,
    /// When true, every branched node is also completed greedily and the
    /// completion is offered to the incumbent
    #[builder(default = "false")]
    pub heuristic_completion: bool,
    /// An optional time budget after which the search gives up proving
    /// optimality
    #[builder(default)]
    pub time_limit: Option<Duration>,
    /// The heuristic seeding the initial lower bound (greedy by default)
    #[builder(default)]
    pub provider: ProviderKind,
}
impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            dominance: DominanceRule::default(),
            eager_pruning: true,
            heuristic_completion: false,
            time_limit: None,
            provider: ProviderKind::default(),
        }
    }
}

// ----------------------------------------------------------------------------
// --- Parsing and display ----------------------------------------------------
// ----------------------------------------------------------------------------
impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depthfirst" => Ok(Strategy::DepthFirst),
            "bfs" | "best-first" | "bestfirst"   => Ok(Strategy::BestFirst),
            _ => Err(format!("unknown strategy '{s}' (expected dfs or best-first)")),
        }
    }
}
impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "dfs"),
            Strategy::BestFirst => write!(f, "best-first"),
        }
    }
}
impl FromStr for DominanceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canonical"                       => Ok(DominanceRule::Canonical),
            "total" | "total-distance"        => Ok(DominanceRule::TotalDistance),
            "none" | "off" | "disabled"       => Ok(DominanceRule::Disabled),
            _ => Err(format!("unknown dominance rule '{s}' (expected canonical, total-distance or none)")),
        }
    }
}
impl fmt::Display for DominanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DominanceRule::Canonical => write!(f, "canonical"),
            DominanceRule::TotalDistance => write!(f, "total-distance"),
            DominanceRule::Disabled => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{DominanceRule, ProviderKind, SolverConfig, SolverConfigBuilder, Strategy};

    #[test]
    fn builder_defaults_match_the_default_config() {
        let built = SolverConfigBuilder::default().build().unwrap();
        assert_eq!(SolverConfig::default(), built);
        assert_eq!(Strategy::BestFirst, built.strategy);
        assert_eq!(DominanceRule::Canonical, built.dominance);
        assert_eq!(ProviderKind::Greedy, built.provider);
        assert!(built.eager_pruning);
        assert!(!built.heuristic_completion);
        assert_eq!(None, built.time_limit);
    }
    #[test]
    fn every_field_can_be_overridden() {
        let built = SolverConfigBuilder::default()
            .strategy(Strategy::DepthFirst)
            .dominance(DominanceRule::Disabled)
            .eager_pruning(false)
            .heuristic_completion(true)
            .time_limit(Some(Duration::from_secs(3)))
            .provider(ProviderKind::Grasp { iterations: 3, rcl_size: 4, seed: 5 })
            .build()
            .unwrap();
        assert_eq!(Strategy::DepthFirst, built.strategy);
        assert_eq!(DominanceRule::Disabled, built.dominance);
        assert!(!built.eager_pruning);
        assert!(built.heuristic_completion);
        assert_eq!(Some(Duration::from_secs(3)), built.time_limit);
    }
    #[test]
    fn strategies_parse_and_display() {
        assert_eq!(Ok(Strategy::DepthFirst), "dfs".parse());
        assert_eq!(Ok(Strategy::BestFirst), "Best-First".parse());
        assert!("random".parse::<Strategy>().is_err());
        assert_eq!("dfs", Strategy::DepthFirst.to_string());
    }
    #[test]
    fn dominance_rules_parse_and_display() {
        assert_eq!(Ok(DominanceRule::TotalDistance), "total-distance".parse());
        assert_eq!(Ok(DominanceRule::Disabled), "none".parse());
        assert!("whatever".parse::<DominanceRule>().is_err());
        for rule in [DominanceRule::Canonical, DominanceRule::TotalDistance, DominanceRule::Disabled] {
            assert_eq!(Ok(rule), rule.to_string().parse());
        }
    }
    #[test]
    fn providers_are_built_with_their_names() {
        assert_eq!("greedy", ProviderKind::Greedy.build().name());
        assert_eq!("grasp", ProviderKind::Grasp { iterations: 1, rcl_size: 1, seed: 0 }.build().name());
        assert_eq!("none", ProviderKind::None.build().name());
    }
}
