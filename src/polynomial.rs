use ark_bn254::Fr;
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::Zero;

use crate::errors::PolynomialError;

/// A univariate polynomial given by its evaluations over the canonical
/// radix-2 evaluation domain of matching size.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEvalForm {
    /// evaluations contains the evaluations of the polynomial, padded with 0s
    /// to the next power of two so that a radix-2 domain of the same size
    /// always exists. Note that padding changes the polynomial: the padded
    /// vector is what gets committed.
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    /// Creates a new [PolynomialEvalForm] from the given evaluations, padded
    /// to the next power of two by appending zeros.
    pub fn new(evals: Vec<Fr>) -> Self {
        let next_power_of_two = evals.len().next_power_of_two();
        let mut padded_evals = evals;
        padded_evals.resize(next_power_of_two, Fr::zero());

        Self {
            evaluations: padded_evals,
        }
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    /// Returns the number of evaluations in the padded polynomial.
    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// Converts the polynomial to coefficient form. This is done by performing
    /// an IFFT on the evaluations.
    pub fn to_coeff_form(&self) -> Result<PolynomialCoeffForm, PolynomialError> {
        let coeffs = GeneralEvaluationDomain::<Fr>::new(self.len())
            .ok_or(PolynomialError::FFTError(
                "Failed to construct domain for IFFT".to_string(),
            ))?
            .ifft(&self.evaluations);
        Ok(PolynomialCoeffForm::new(coeffs))
    }
}

/// A univariate polynomial given by its coefficients, low-degree term first.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCoeffForm {
    /// coeffs contains the coefficients of the polynomial, padded with 0s to
    /// the next power of two. Hence if the polynomial is created with
    /// coefficients [1, 2, 3], the internal representation will be
    /// [1, 2, 3, 0].
    coeffs: Vec<Fr>,
}

impl PolynomialCoeffForm {
    /// Creates a new [PolynomialCoeffForm] from the given coefficients, padded
    /// to the next power of two by appending zeros.
    pub fn new(coeffs: Vec<Fr>) -> Self {
        let next_power_of_two = coeffs.len().next_power_of_two();
        let mut padded_coeffs = coeffs;
        padded_coeffs.resize(next_power_of_two, Fr::zero());

        Self {
            coeffs: padded_coeffs,
        }
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    /// Returns the number of coefficients in the padded polynomial.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn get_at_index(&self, i: usize) -> Option<&Fr> {
        self.coeffs.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the represented polynomial, ignoring the zero padding.
    /// The zero polynomial reports degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or_default()
    }

    /// Evaluates the polynomial at `point` by Horner's rule.
    pub fn evaluate(&self, point: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * point + coeff)
    }

    /// Converts the polynomial to evaluation form. This is done by performing
    /// an FFT on the coefficients.
    pub fn to_eval_form(&self) -> Result<PolynomialEvalForm, PolynomialError> {
        let evals = GeneralEvaluationDomain::<Fr>::new(self.len())
            .ok_or(PolynomialError::FFTError(
                "Failed to construct domain for FFT".to_string(),
            ))?
            .fft(&self.coeffs);
        Ok(PolynomialEvalForm::new(evals))
    }
}
