//! MILP backend backed by `good_lp`'s pure-Rust microlp solver.

use std::time::Instant;

use good_lp::{microlp, variable, Expression, ProblemVariables, Solution as LpSolution, SolverModel};
use tracing::warn;

use super::program::{CoverProgram, IpOutcome, IpSolve};

/// Formulates the covering program as a mixed-integer linear program
/// and hands it to microlp.
///
/// microlp exposes no mid-solve cancellation, so the deadline is only
/// honored before the solve starts. An already-expired budget falls
/// back to the incumbent, as does a solver failure (which a well-formed
/// covering program never produces, since selecting every variable is
/// feasible).
pub struct Milp;

impl IpSolve for Milp {
    fn solve(&self, program: &CoverProgram, incumbent: &[usize], deadline: Instant) -> IpOutcome {
        if program.element_count == 0 {
            return IpOutcome {
                selected: Vec::new(),
                proven_optimal: true,
                best_bound: 0.0,
            };
        }

        let fallback = || {
            let mut selected = incumbent.to_vec();
            selected.sort_unstable();
            IpOutcome {
                selected,
                proven_optimal: false,
                best_bound: program.root_bound() as f64,
            }
        };

        if Instant::now() >= deadline {
            return fallback();
        }

        let mut vars = ProblemVariables::new();
        let mut x = Vec::with_capacity(program.var_count());
        for _ in 0..program.var_count() {
            x.push(vars.add(variable().binary()));
        }

        let mut objective = Expression::with_capacity(x.len());
        for xi in &x {
            objective.add_mul(1., *xi);
        }

        let mut model = vars.minimise(objective).using(microlp);
        for element in 0..program.element_count {
            let covering: Vec<usize> = (0..program.var_count())
                .filter(|&v| program.covers[v].contains(element))
                .collect();
            let mut lhs = Expression::with_capacity(covering.len());
            for v in covering {
                lhs.add_mul(1., x[v]);
            }
            model.add_constraint(lhs.geq(1));
        }

        match model.solve() {
            Ok(assignment) => {
                let selected: Vec<usize> = x
                    .iter()
                    .enumerate()
                    .filter(|(_, xi)| assignment.value(**xi) >= 0.5)
                    .map(|(v, _)| v)
                    .collect();
                let objective = selected.len() as f64;
                IpOutcome {
                    selected,
                    proven_optimal: true,
                    best_bound: objective,
                }
            }
            Err(error) => {
                warn!(?error, "MILP backend failed; falling back to the incumbent");
                fallback()
            }
        }
    }
}
