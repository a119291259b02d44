//! Splice recombination (§4.7): assemble a child chromosome from a chosen
//! pivot vertex and one allele from each of two parents.

use tsp_common::CostMatrix;

use super::chromosome::Chromosome;

/// Build a child from `v_star`, `first_allele`, `second_allele` (each
/// sourced independently - possibly from different parents). Fails if
/// either allele already contains `v_star`, the alleles share a vertex, or
/// any of the three splice edges `(v*, fa.head)`, `(fa.tail, sa.head)`,
/// `(sa.tail, v*)` is absent. `first_allele_cost`/`second_allele_cost` are
/// inherited unchanged from whichever parent contributed that allele.
pub fn try_recombine(
    matrix: &CostMatrix,
    v_star: usize,
    first_allele: &[usize],
    first_allele_cost: i64,
    second_allele: &[usize],
    second_allele_cost: i64,
) -> Option<Chromosome> {
    if first_allele.contains(&v_star) || second_allele.contains(&v_star) {
        return None;
    }
    if first_allele.iter().any(|v| second_allele.contains(v)) {
        return None;
    }

    let fa_head = *first_allele.first()?;
    let fa_tail = *first_allele.last()?;
    let sa_head = *second_allele.first()?;
    let sa_tail = *second_allele.last()?;

    let to_first = matrix.cost(v_star, fa_head)?;
    let inter_allele_cost = matrix.cost(fa_tail, sa_head)?;
    let from_second = matrix.cost(sa_tail, v_star)?;

    Some(Chromosome::from_parts(
        v_star,
        first_allele.to_vec(),
        second_allele.to_vec(),
        first_allele_cost,
        second_allele_cost,
        inter_allele_cost,
        to_first + from_second,
    ))
}

/// Every candidate child obtainable from a parent pair: v*, first allele,
/// and second allele are each chosen independently from `p1` or `p2`, for
/// up to `2 * 2 * 2 = 8` candidates. Infeasible combinations are silently
/// dropped.
pub fn candidates(matrix: &CostMatrix, p1: &Chromosome, p2: &Chromosome) -> Vec<Chromosome> {
    let mut out = Vec::with_capacity(8);
    for v_star in [p1.v_star(), p2.v_star()] {
        for (fa, fa_cost) in [
            (p1.first_allele(), p1.first_allele_cost()),
            (p2.first_allele(), p2.first_allele_cost()),
        ] {
            for (sa, sa_cost) in [
                (p1.second_allele(), p1.second_allele_cost()),
                (p2.second_allele(), p2.second_allele_cost()),
            ] {
                if let Some(child) = try_recombine(matrix, v_star, fa, fa_cost, sa, sa_cost) {
                    out.push(child);
                }
            }
        }
    }
    out
}
