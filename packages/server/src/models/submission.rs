use thiserror::Error;

/// Generic notice flashed ahead of the per-field messages.
pub const INCOMPLETE_MESSAGE: &str = "Please complete all fields before submitting.";

/// The five planner inputs, in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Goal,
    Timeframe,
    CurrentSavings,
    MonthlyIncome,
    RiskTolerance,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Goal,
        Field::Timeframe,
        Field::CurrentSavings,
        Field::MonthlyIncome,
        Field::RiskTolerance,
    ];

    /// Name of the form input carrying this field.
    pub fn form_name(self) -> &'static str {
        match self {
            Self::Goal => "financial_goal",
            Self::Timeframe => "timeframe",
            Self::CurrentSavings => "current_savings",
            Self::MonthlyIncome => "monthly_income",
            Self::RiskTolerance => "risk_tolerance",
        }
    }

    /// Question asked on the form, reused in the missing-field message.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Goal => "What is your financial goal?",
            Self::Timeframe => "What is your target timeframe to achieve this goal?",
            Self::CurrentSavings => "What is your current savings?",
            Self::MonthlyIncome => "What is your monthly income?",
            Self::RiskTolerance => "What is your risk tolerance?",
        }
    }

    /// Short label shown next to the value on the results page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Goal => "Financial goal",
            Self::Timeframe => "Timeframe",
            Self::CurrentSavings => "Current savings",
            Self::MonthlyIncome => "Monthly income",
            Self::RiskTolerance => "Risk tolerance",
        }
    }
}

/// Raw form body. Absent inputs are left as the empty string.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub financial_goal: String,
    pub timeframe: String,
    pub current_savings: String,
    pub monthly_income: String,
    pub risk_tolerance: String,
}

impl SubmissionForm {
    fn raw_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Goal => &mut self.financial_goal,
            Field::Timeframe => &mut self.timeframe,
            Field::CurrentSavings => &mut self.current_savings,
            Field::MonthlyIncome => &mut self.monthly_income,
            Field::RiskTolerance => &mut self.risk_tolerance,
        }
    }

    fn raw(&self, field: Field) -> &str {
        match field {
            Field::Goal => &self.financial_goal,
            Field::Timeframe => &self.timeframe,
            Field::CurrentSavings => &self.current_savings,
            Field::MonthlyIncome => &self.monthly_income,
            Field::RiskTolerance => &self.risk_tolerance,
        }
    }

    /// Trim every field and check that none is blank.
    ///
    /// Only presence is checked: savings and income are passed through as
    /// text even when they do not look numeric.
    pub fn validate(&self) -> Result<Submission, MissingFields> {
        let missing: Vec<MissingField> = Field::ALL
            .into_iter()
            .filter(|field| self.raw(*field).trim().is_empty())
            .map(MissingField)
            .collect();

        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        Ok(Submission {
            goal: self.financial_goal.trim().to_string(),
            timeframe: self.timeframe.trim().to_string(),
            current_savings: self.current_savings.trim().to_string(),
            monthly_income: self.monthly_income.trim().to_string(),
            risk_tolerance: self.risk_tolerance.trim().to_string(),
        })
    }
}

/// Builds a form from decoded name/value pairs.
///
/// The first value of a repeated name wins. Unknown names are ignored.
impl FromIterator<(String, String)> for SubmissionForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        let mut seen = [false; Field::ALL.len()];
        for (name, value) in pairs {
            let Some(index) = Field::ALL.iter().position(|f| f.form_name() == name) else {
                continue;
            };
            if seen[index] {
                continue;
            }
            seen[index] = true;
            *form.raw_mut(Field::ALL[index]) = value;
        }
        form
    }
}

/// A validated submission. Every value is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub goal: String,
    pub timeframe: String,
    pub current_savings: String,
    pub monthly_income: String,
    pub risk_tolerance: String,
}

impl Submission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Goal => &self.goal,
            Field::Timeframe => &self.timeframe,
            Field::CurrentSavings => &self.current_savings,
            Field::MonthlyIncome => &self.monthly_income,
            Field::RiskTolerance => &self.risk_tolerance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing: {}", .0.prompt())]
pub struct MissingField(pub Field);

/// Every blank field of a rejected submission, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(Vec<MissingField>);

impl MissingFields {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|missing| missing.0)
    }

    /// Messages to flash: the generic notice, then one line per missing field.
    pub fn messages(&self) -> Vec<String> {
        std::iter::once(INCOMPLETE_MESSAGE.to_string())
            .chain(self.0.iter().map(ToString::to_string))
            .collect()
    }
}
