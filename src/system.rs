//! Weighted-average Sugeno inference
//!
//! A [`FuzzySystem`] owns an ordered rule base fixed at construction and
//! computes, per call, the firing-strength weighted average of the rule
//! consequents. There is no other state: `compute` is a pure function of the
//! rule base and the input assignment, and concurrent callers need no
//! synchronization.

use crate::error::{SugenoError, SugenoResult};
use crate::inputs::Inputs;
use crate::rule::Rule;

/// A zero-order Takagi-Sugeno fuzzy inference system
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    rules: Vec<Rule>,
}

impl FuzzySystem {
    /// Assemble a system from an ordered rule collection.
    ///
    /// Rule order has no effect on the computed output (aggregation is
    /// commutative) but is preserved for reproducible diagnostics. An empty
    /// collection is rejected here, so every constructed system can produce
    /// a defined output.
    pub fn new(rules: Vec<Rule>) -> SugenoResult<Self> {
        if rules.is_empty() {
            return Err(SugenoError::empty_rule_base());
        }
        Ok(Self { rules })
    }

    /// The rules, in construction order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false; an empty rule base cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Per-rule firing strengths for an input assignment, in rule order
    pub fn fire_strengths(&self, inputs: &Inputs) -> SugenoResult<Vec<f64>> {
        self.rules
            .iter()
            .map(|rule| Ok(rule.fire_strength(inputs)?.value()))
            .collect()
    }

    /// Compute the crisp output for a named input assignment.
    ///
    /// Output = sum(w_i * consequent_i) / sum(w_i) over all rules, where w_i
    /// is rule i's firing strength. If every antecedent evaluates to exactly
    /// zero the weighted average is undefined; that case fails with a
    /// no-rule-fired error rather than returning a default, since it is only
    /// reachable through inputs outside every term's support.
    pub fn compute(&self, inputs: &Inputs) -> SugenoResult<f64> {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for rule in &self.rules {
            let w = rule.fire_strength(inputs)?.value();
            weighted_sum += w * rule.consequent();
            total_weight += w;
        }

        if total_weight == 0.0 {
            return Err(SugenoError::no_rule_fired());
        }

        Ok(weighted_sum / total_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::membership::MembershipFunction;
    use crate::variable::InputVariable;

    fn rating(name: &str) -> InputVariable {
        let mut var = InputVariable::new(name, 0.0..=10.0);
        var.set_term("low", MembershipFunction::triangular(0.0, 0.0, 5.0).unwrap());
        var.set_term("good", MembershipFunction::triangular(0.0, 5.0, 10.0).unwrap());
        var.set_term(
            "excellent",
            MembershipFunction::triangular(5.0, 10.0, 10.0).unwrap(),
        );
        var
    }

    /// The tipping system: food and service ratings to a tip percentage,
    /// one rule per term pair.
    fn tipping_system() -> FuzzySystem {
        let food = rating("food");
        let service = rating("service");

        let pair = |f: &str, s: &str| food.is(f).unwrap() & service.is(s).unwrap();

        FuzzySystem::new(vec![
            Rule::new(pair("low", "low"), 0.0),
            Rule::new(pair("low", "good"), 5.0),
            Rule::new(pair("good", "low"), 8.0),
            Rule::new(pair("low", "excellent"), 10.0),
            Rule::new(pair("excellent", "low"), 9.0),
            Rule::new(pair("good", "good"), 10.0),
            Rule::new(pair("good", "excellent"), 12.0),
            Rule::new(pair("excellent", "good"), 15.0),
            Rule::new(pair("excellent", "excellent"), 20.0),
        ])
        .unwrap()
    }

    fn tip(system: &FuzzySystem, food: f64, service: f64) -> f64 {
        system
            .compute(&Inputs::new().with("food", food).with("service", service))
            .unwrap()
    }

    #[test]
    fn test_empty_rule_base_rejected() {
        let err = FuzzySystem::new(Vec::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyRuleBase);
    }

    #[test]
    fn test_upper_boundary() {
        // At (10, 10) only excellent/excellent has nonzero membership
        let system = tipping_system();
        assert!((tip(&system, 10.0, 10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_lower_boundary() {
        // At (0, 0) only low/low has nonzero membership
        let system = tipping_system();
        assert!((tip(&system, 0.0, 0.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_single_rule() {
        // At the midpoint "good" peaks at 1 while low and excellent are 0,
        // so the output is exactly the good/good consequent
        let system = tipping_system();
        assert!((tip(&system, 5.0, 5.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_corners() {
        let system = tipping_system();
        assert!((tip(&system, 10.0, 0.0) - 9.0).abs() < 1e-12);
        assert!((tip(&system, 0.0, 10.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_memberships() {
        // At (4, 4): low = 0.2 and good = 0.8 on both variables, so four
        // rules fire: ll -> 0.2*0, lg -> 0.2*5, gl -> 0.2*8, gg -> 0.8*10.
        // Output = (0 + 1 + 1.6 + 8) / (0.2 + 0.2 + 0.2 + 0.8) = 10.6 / 1.4
        let system = tipping_system();
        assert!((tip(&system, 4.0, 4.0) - 10.6 / 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_memberships_asymmetric() {
        // At (2, 6): food low = 0.6, good = 0.4; service good = 0.8,
        // excellent = 0.2. Firing rules: lg -> 0.6*5, le -> 0.2*10,
        // gg -> 0.4*10, ge -> 0.2*12. Output = 11.4 / 1.4
        let system = tipping_system();
        assert!((tip(&system, 2.0, 6.0) - 11.4 / 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_fire_strengths_in_rule_order() {
        let system = tipping_system();
        let inputs = Inputs::new().with("food", 10.0).with("service", 10.0);

        let strengths = system.fire_strengths(&inputs).unwrap();
        assert_eq!(strengths.len(), 9);
        assert_eq!(strengths[8], 1.0);
        assert!(strengths[..8].iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let system = tipping_system();
        let first = tip(&system, 3.0, 7.0);
        for _ in 0..5 {
            assert_eq!(tip(&system, 3.0, 7.0), first);
        }
    }

    #[test]
    fn test_no_rule_fired_off_domain() {
        // Off-domain inputs are accepted by membership evaluation but leave
        // every antecedent at zero
        let system = tipping_system();
        let inputs = Inputs::new().with("food", -3.0).with("service", -3.0);

        let err = system.compute(&inputs).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoRuleFired);
    }

    #[test]
    fn test_unbound_variable_surfaces() {
        let system = tipping_system();
        let inputs = Inputs::new().with("food", 5.0);

        let err = system.compute(&inputs).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnboundVariable);
    }

    #[test]
    fn test_system_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FuzzySystem>();
    }
}
