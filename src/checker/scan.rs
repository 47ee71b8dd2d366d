use crate::model::CallableSignature;

use super::registry::WideTypeRegistry;
use super::violation::{Diagnostic, ViolationDescriptor};

/// Violations of one signature: receiver first, then parameters and results
/// in declaration order.
#[must_use]
pub fn violations_of(
    signature: &CallableSignature,
    registry: &WideTypeRegistry,
) -> Vec<ViolationDescriptor> {
    let mut violations = Vec::new();

    if let Some(receiver) = &signature.receiver
        && registry.contains(&receiver.ty)
    {
        violations.push(ViolationDescriptor::Receiver);
    }

    for (index, param) in signature.params.iter().enumerate() {
        if registry.contains(&param.ty) {
            violations.push(ViolationDescriptor::Parameter {
                index,
                name: param.name.clone().filter(|name| !name.is_empty()),
            });
        }
    }

    for (index, result) in signature.results.iter().enumerate() {
        if registry.contains(&result.ty) {
            violations.push(ViolationDescriptor::Result {
                index,
                type_text: result.ty.to_string(),
            });
        }
    }

    violations
}

/// One diagnostic per signature with at least one violation, in input order.
#[must_use]
pub fn scan(signatures: &[CallableSignature], registry: &WideTypeRegistry) -> Vec<Diagnostic> {
    signatures
        .iter()
        .filter_map(|signature| {
            Diagnostic::new(signature.clone(), violations_of(signature, registry))
        })
        .collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
