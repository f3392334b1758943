//! The decision-variable registry and constraint accumulator.
//!
//! [`ShiftModel`] owns one boolean assignment variable per
//! (staff, day, shift, post) and, when the policy allows 24-hour shifts,
//! one 24-hour indicator per (staff, day),
//! plus the growing constraint set and objective expression. Constraint
//! groups are emitted by the sibling modules; the model itself only knows
//! how to create variables and aggregate them into sums.

use std::collections::HashMap;

use good_lp::{Constraint, Expression, ProblemVariables, Variable, variable, variables};

use crate::config::SchedulePolicy;
use crate::models::{Horizon, Post, ShiftKind};
use crate::roster::Roster;

/// Key of one assignment variable: (staff id, 1-based day, shift, post).
pub type AssignKey = (usize, u32, ShiftKind, Post);

/// The in-construction scheduling model.
pub struct ShiftModel {
    pub(crate) vars: ProblemVariables,
    pub(crate) assignment: HashMap<AssignKey, Variable>,
    pub(crate) is_24h: HashMap<(usize, u32), Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objective: Expression,
    posts: Vec<Post>,
    n_staff: usize,
    n_days: u32,
    n_vars: usize,
}

impl ShiftModel {
    /// Creates the variable set for the given roster, policy, and horizon.
    ///
    /// Instantiates every assignment variable. When the policy allows
    /// 24-hour shifts it also creates one 24-hour indicator per
    /// (staff, day) with the exact two-sided linkage:
    /// `is24 <= day`, `is24 <= night`, `is24 >= day + night - 1`.
    /// Without the toggle the indicator would be constant zero, so it is
    /// never created.
    pub fn new(roster: &Roster, policy: &SchedulePolicy, horizon: &Horizon) -> Self {
        let mut model = Self {
            vars: variables!(),
            assignment: HashMap::new(),
            is_24h: HashMap::new(),
            constraints: Vec::new(),
            objective: Expression::from(0.0),
            posts: policy.posts.clone(),
            n_staff: roster.len(),
            n_days: horizon.len(),
            n_vars: 0,
        };

        let posts = model.posts.clone();
        for member in &roster.staff {
            for day in horizon.days() {
                for shift in ShiftKind::ALL {
                    for &post in &posts {
                        let var = model.add_bool(format!(
                            "a_{}_{}_{:?}_{:?}",
                            member.id, day.index, shift, post
                        ));
                        model
                            .assignment
                            .insert((member.id, day.index, shift, post), var);
                    }
                }

                if policy.allow_24h_shifts {
                    let is24 = model.add_bool(format!("is24_{}_{}", member.id, day.index));
                    model.is_24h.insert((member.id, day.index), is24);

                    let day_sum = model.kind_sum(member.id, day.index, ShiftKind::Day);
                    let night_sum = model.kind_sum(member.id, day.index, ShiftKind::Night);
                    model.add_constraint((Expression::from(is24) - day_sum.clone()).leq(0.0));
                    model.add_constraint((Expression::from(is24) - night_sum.clone()).leq(0.0));
                    model.add_constraint(
                        (day_sum + night_sum - Expression::from(is24)).leq(1.0),
                    );
                }
            }
        }

        model
    }

    /// Adds a fresh binary variable.
    pub fn add_bool(&mut self, name: String) -> Variable {
        self.n_vars += 1;
        self.vars.add(variable().binary().name(name))
    }

    /// Adds a fresh continuous variable bounded to `0.0..=max`.
    ///
    /// Used for the spread extremes: bounded against integer counters and
    /// pulled tight by the objective, they land on integer values without
    /// costing the solver an integrality branch.
    pub fn add_real(&mut self, name: String, max: f64) -> Variable {
        self.n_vars += 1;
        self.vars.add(variable().min(0.0).max(max).name(name))
    }

    /// Records a hard constraint.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Adds `coefficient * variable` to the objective.
    pub fn add_objective_term(&mut self, coefficient: f64, variable: Variable) {
        self.objective.add_mul(coefficient, variable);
    }

    /// The assignment variable for the given key.
    ///
    /// Every key combining a roster staff id, a horizon day, a shift kind,
    /// and an active post exists by construction.
    pub fn assignment(&self, staff: usize, day: u32, shift: ShiftKind, post: Post) -> Variable {
        *self
            .assignment
            .get(&(staff, day, shift, post))
            .expect("assignment variable exists for every (staff, day, shift, post)")
    }

    /// The 24-hour indicator for (staff, day).
    ///
    /// Only exists when the policy allows 24-hour shifts.
    pub fn is_24h(&self, staff: usize, day: u32) -> Variable {
        *self
            .is_24h
            .get(&(staff, day))
            .expect("24h indicator exists for every (staff, day) when 24h shifts are allowed")
    }

    /// Sum over posts of one shift kind for (staff, day).
    pub fn kind_sum(&self, staff: usize, day: u32, shift: ShiftKind) -> Expression {
        self.posts
            .iter()
            .fold(Expression::from(0.0), |acc, &post| {
                acc + self.assignment(staff, day, shift, post)
            })
    }

    /// Sum of all shift variables for (staff, day).
    pub fn day_total(&self, staff: usize, day: u32) -> Expression {
        ShiftKind::ALL
            .into_iter()
            .fold(Expression::from(0.0), |acc, shift| {
                acc + self.kind_sum(staff, day, shift)
            })
    }

    /// All shift variables for (staff, day), across kinds and posts.
    pub fn shift_vars(&self, staff: usize, day: u32) -> Vec<Variable> {
        let mut out = Vec::with_capacity(ShiftKind::ALL.len() * self.posts.len());
        for shift in ShiftKind::ALL {
            for &post in &self.posts {
                out.push(self.assignment(staff, day, shift, post));
            }
        }
        out
    }

    /// Sum over staff of one (shift, post) on a day — the coverage row.
    pub fn coverage_sum(&self, day: u32, shift: ShiftKind, post: Post) -> Expression {
        (0..self.n_staff).fold(Expression::from(0.0), |acc, staff| {
            acc + self.assignment(staff, day, shift, post)
        })
    }

    /// The active posts.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of staff in the model.
    pub fn staff_count(&self) -> usize {
        self.n_staff
    }

    /// Number of days in the model.
    pub fn day_count(&self) -> u32 {
        self.n_days
    }

    /// Number of variables created so far.
    pub fn variable_count(&self) -> usize {
        self.n_vars
    }

    /// Number of constraints recorded so far.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Splits the model into the pieces the solving engine consumes.
    pub(crate) fn into_parts(
        self,
    ) -> (
        ProblemVariables,
        Vec<Constraint>,
        Expression,
        HashMap<AssignKey, Variable>,
    ) {
        (self.vars, self.constraints, self.objective, self.assignment)
    }
}
