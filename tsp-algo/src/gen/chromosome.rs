//! The two-allele GEN chromosome (§4.7): a closed tour split into a pivot
//! vertex v*, a first allele, and a second allele, with the tour cost
//! cached as four components so a single swap updates only the buckets it
//! actually touches instead of re-summing the whole tour.

use tsp_common::CostMatrix;

/// Which cached cost bucket an edge at a given tour position belongs to.
enum Bucket {
    FirstLastV,
    FirstAllele,
    InterAllele,
    SecondAllele,
}

/// `v*, first_allele, second_allele` plus the four cached cost components
/// whose sum is the tour's true cost (P7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    v_star: usize,
    first_allele: Vec<usize>,
    second_allele: Vec<usize>,
    first_allele_cost: i64,
    second_allele_cost: i64,
    inter_allele_cost: i64,
    first_last_v_cost: i64,
}

impl Chromosome {
    /// Build a chromosome from an open tour (`n` vertices, no trailing
    /// repeat) by splitting at `split`: `tour[0]` becomes v*, `tour[1..=split]`
    /// the first allele, `tour[split+1..]` the second allele. Both alleles
    /// must be non-empty. Returns `None` if any of the tour's own edges is
    /// absent.
    pub fn from_tour(matrix: &CostMatrix, tour: &[usize], split: usize) -> Option<Self> {
        let n = tour.len();
        if split < 1 || split > n.saturating_sub(2) {
            return None;
        }

        let v_star = tour[0];
        let first_allele = tour[1..=split].to_vec();
        let second_allele = tour[split + 1..].to_vec();

        let first_allele_cost = path_cost(matrix, &first_allele)?;
        let second_allele_cost = path_cost(matrix, &second_allele)?;
        let inter_allele_cost = matrix.cost(*first_allele.last()?, second_allele[0])?;
        let first_last_v_cost = matrix.cost(v_star, first_allele[0])?
            + matrix.cost(*second_allele.last()?, v_star)?;

        Some(Self {
            v_star,
            first_allele,
            second_allele,
            first_allele_cost,
            second_allele_cost,
            inter_allele_cost,
            first_last_v_cost,
        })
    }

    /// Assemble a chromosome directly from its pieces and already-known
    /// costs, as recombination does - no edge lookups, no recomputation.
    pub(super) fn from_parts(
        v_star: usize,
        first_allele: Vec<usize>,
        second_allele: Vec<usize>,
        first_allele_cost: i64,
        second_allele_cost: i64,
        inter_allele_cost: i64,
        first_last_v_cost: i64,
    ) -> Self {
        Self {
            v_star,
            first_allele,
            second_allele,
            first_allele_cost,
            second_allele_cost,
            inter_allele_cost,
            first_last_v_cost,
        }
    }

    pub fn v_star(&self) -> usize {
        self.v_star
    }

    pub fn first_allele(&self) -> &[usize] {
        &self.first_allele
    }

    pub fn second_allele(&self) -> &[usize] {
        &self.second_allele
    }

    pub fn first_allele_cost(&self) -> i64 {
        self.first_allele_cost
    }

    pub fn second_allele_cost(&self) -> i64 {
        self.second_allele_cost
    }

    /// Sum of the four cached components - the chromosome's tour cost.
    pub fn cost(&self) -> i64 {
        self.first_allele_cost + self.second_allele_cost + self.inter_allele_cost + self.first_last_v_cost
    }

    /// Number of distinct vertices in the chromosome (v* plus both alleles).
    pub fn len(&self) -> usize {
        1 + self.first_allele.len() + self.second_allele.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The full closed tour: v*, first allele, second allele, back to v*.
    pub fn tour(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len() + 1);
        out.push(self.v_star);
        out.extend_from_slice(&self.first_allele);
        out.extend_from_slice(&self.second_allele);
        out.push(self.v_star);
        out
    }

    fn vertex_at(&self, position: usize) -> usize {
        let split = self.first_allele.len();
        if position == 0 {
            self.v_star
        } else if position <= split {
            self.first_allele[position - 1]
        } else {
            self.second_allele[position - split - 1]
        }
    }

    fn set_vertex_at(&mut self, position: usize, value: usize) {
        let split = self.first_allele.len();
        if position == 0 {
            self.v_star = value;
        } else if position <= split {
            self.first_allele[position - 1] = value;
        } else {
            self.second_allele[position - split - 1] = value;
        }
    }

    fn bucket_of(&self, position: usize) -> Bucket {
        let split = self.first_allele.len();
        let n = self.len();
        if position == 0 || position == n - 1 {
            Bucket::FirstLastV
        } else if position < split {
            Bucket::FirstAllele
        } else if position == split {
            Bucket::InterAllele
        } else {
            Bucket::SecondAllele
        }
    }

    /// Swap the vertices at tour positions `i` and `j` (`i != j`, both
    /// `< len()`), exhaustively updating whichever of the four cached
    /// buckets the (at most four) affected edges belong to. Returns `false`
    /// and leaves the chromosome unchanged if the swap would introduce an
    /// absent edge.
    pub(crate) fn swap(&mut self, matrix: &CostMatrix, i: usize, j: usize) -> bool {
        let n = self.len();
        debug_assert!(i < n && j < n && i != j);

        let mut positions = vec![(i + n - 1) % n, i, (j + n - 1) % n, j];
        positions.sort_unstable();
        positions.dedup();

        let Some(before) = edge_costs(self, matrix, &positions) else { return false };

        let vi = self.vertex_at(i);
        let vj = self.vertex_at(j);
        self.set_vertex_at(i, vj);
        self.set_vertex_at(j, vi);

        let Some(after) = edge_costs(self, matrix, &positions) else {
            self.set_vertex_at(i, vi);
            self.set_vertex_at(j, vj);
            return false;
        };

        for (idx, &p) in positions.iter().enumerate() {
            let delta = after[idx] - before[idx];
            match self.bucket_of(p) {
                Bucket::FirstLastV => self.first_last_v_cost += delta,
                Bucket::FirstAllele => self.first_allele_cost += delta,
                Bucket::InterAllele => self.inter_allele_cost += delta,
                Bucket::SecondAllele => self.second_allele_cost += delta,
            }
        }

        true
    }
}

fn edge_costs(chromosome: &Chromosome, matrix: &CostMatrix, positions: &[usize]) -> Option<Vec<i64>> {
    let n = chromosome.len();
    positions
        .iter()
        .map(|&p| matrix.cost(chromosome.vertex_at(p), chromosome.vertex_at((p + 1) % n)))
        .collect()
}

fn path_cost(matrix: &CostMatrix, path: &[usize]) -> Option<i64> {
    path.windows(2).try_fold(0i64, |acc, w| matrix.cost(w[0], w[1]).map(|c| acc + c))
}
