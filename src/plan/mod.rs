use crate::plan::error::CatalogError;
use crate::plan::error::CatalogError::{DuplicatePlan, InvalidDuration, MissingPlan, NegativePrice};
use crate::tools::log_message;
use derive_getters::Getters;
use dto::plan_code::PlanCode;
use rust_decimal::Decimal;

pub mod error;

/// Duration and price of a plan.
#[derive(Debug, Getters, Clone, Copy, PartialEq, Eq)]
pub struct PlanDefinition {
    code: PlanCode,
    duration_days: u32,
    price: Decimal,
}

impl PlanDefinition {
    pub fn new(code: PlanCode, duration_days: u32, price: Decimal) -> Self {
        Self {
            code,
            duration_days,
            price,
        }
    }

    fn validate(self) -> Result<Self, CatalogError> {
        if self.duration_days < 1 {
            return Err(InvalidDuration(self.code, self.duration_days));
        }
        if self.price < Decimal::ZERO {
            return Err(NegativePrice(self.code, self.price));
        }

        Ok(self)
    }
}

/// Every plan sold, with its duration and price.
/// A catalog always holds exactly one definition per [PlanCode], so lookups can't fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    daily: PlanDefinition,
    monthly: PlanDefinition,
    three_month: PlanDefinition,
    yearly: PlanDefinition,
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            daily: PlanDefinition::new(PlanCode::Daily, 1, Decimal::new(200, 2)),
            monthly: PlanDefinition::new(PlanCode::Monthly, 30, Decimal::new(2000, 2)),
            three_month: PlanDefinition::new(PlanCode::ThreeMonth, 90, Decimal::new(5000, 2)),
            yearly: PlanDefinition::new(PlanCode::Yearly, 365, Decimal::new(15000, 2)),
        }
    }
}

impl PlanCatalog {
    /// Build a catalog from configured definitions.
    /// Each plan must be defined exactly once, last at least a day and cost a non-negative price.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = PlanDefinition>,
    {
        let mut daily = None;
        let mut monthly = None;
        let mut three_month = None;
        let mut yearly = None;

        for definition in definitions {
            let definition = definition
                .validate()
                .inspect_err(|e| log_message("Invalid plan definition.")(e))?;
            let slot = match definition.code {
                PlanCode::Daily => &mut daily,
                PlanCode::Monthly => &mut monthly,
                PlanCode::ThreeMonth => &mut three_month,
                PlanCode::Yearly => &mut yearly,
            };
            if slot.replace(definition).is_some() {
                error!("Plan {} is defined twice.", definition.code);
                return Err(DuplicatePlan(definition.code));
            }
        }

        debug!("Plan catalog built from configured definitions.");

        Ok(Self {
            daily: daily.ok_or(MissingPlan(PlanCode::Daily))?,
            monthly: monthly.ok_or(MissingPlan(PlanCode::Monthly))?,
            three_month: three_month.ok_or(MissingPlan(PlanCode::ThreeMonth))?,
            yearly: yearly.ok_or(MissingPlan(PlanCode::Yearly))?,
        })
    }

    pub fn definition(&self, code: PlanCode) -> &PlanDefinition {
        match code {
            PlanCode::Daily => &self.daily,
            PlanCode::Monthly => &self.monthly,
            PlanCode::ThreeMonth => &self.three_month,
            PlanCode::Yearly => &self.yearly,
        }
    }

    pub fn duration_days(&self, code: PlanCode) -> u32 {
        self.definition(code).duration_days
    }

    pub fn price(&self, code: PlanCode) -> Decimal {
        self.definition(code).price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn definitions() -> Vec<PlanDefinition> {
        vec![
            PlanDefinition::new(PlanCode::Daily, 1, Decimal::new(3, 0)),
            PlanDefinition::new(PlanCode::Monthly, 31, Decimal::new(25, 0)),
            PlanDefinition::new(PlanCode::ThreeMonth, 92, Decimal::new(60, 0)),
            PlanDefinition::new(PlanCode::Yearly, 366, Decimal::ZERO),
        ]
    }

    #[parameterized(
        code = {PlanCode::Daily, PlanCode::Monthly, PlanCode::ThreeMonth, PlanCode::Yearly},
        expected_duration = {1, 30, 90, 365},
        expected_price = {"2.00", "20.00", "50.00", "150.00"}
    )]
    fn should_hold_default_plans(code: PlanCode, expected_duration: u32, expected_price: &str) {
        let catalog = PlanCatalog::default();

        assert_eq!(expected_duration, catalog.duration_days(code));
        assert_eq!(expected_price, catalog.price(code).to_string());
        assert_eq!(code, *catalog.definition(code).code());
    }

    #[test]
    fn should_build_catalog_from_definitions() {
        let catalog = PlanCatalog::from_definitions(definitions()).unwrap();

        assert_eq!(31, catalog.duration_days(PlanCode::Monthly));
        assert_eq!(Decimal::new(60, 0), catalog.price(PlanCode::ThreeMonth));
        assert_eq!(Decimal::ZERO, catalog.price(PlanCode::Yearly));
    }

    #[test]
    fn should_fail_to_build_catalog_when_plan_is_missing() {
        let mut definitions = definitions();
        definitions.remove(2);

        assert_eq!(
            Err(MissingPlan(PlanCode::ThreeMonth)),
            PlanCatalog::from_definitions(definitions)
        );
    }

    #[test]
    fn should_fail_to_build_catalog_when_plan_is_duplicated() {
        let mut definitions = definitions();
        definitions.push(PlanDefinition::new(PlanCode::Daily, 2, Decimal::ONE));

        assert_eq!(
            Err(DuplicatePlan(PlanCode::Daily)),
            PlanCatalog::from_definitions(definitions)
        );
    }

    #[test]
    fn should_fail_to_build_catalog_when_duration_is_zero() {
        let mut definitions = definitions();
        definitions[0] = PlanDefinition::new(PlanCode::Daily, 0, Decimal::ONE);

        assert_eq!(
            Err(InvalidDuration(PlanCode::Daily, 0)),
            PlanCatalog::from_definitions(definitions)
        );
    }

    #[test]
    fn should_fail_to_build_catalog_when_price_is_negative() {
        let mut definitions = definitions();
        definitions[1] = PlanDefinition::new(PlanCode::Monthly, 30, Decimal::NEGATIVE_ONE);

        assert_eq!(
            Err(NegativePrice(PlanCode::Monthly, Decimal::NEGATIVE_ONE)),
            PlanCatalog::from_definitions(definitions)
        );
    }
}
