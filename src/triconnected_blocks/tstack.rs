/// Stack of candidate separation pairs `(h, a, b)` used by the path search.
///
/// - `a`, `b`: ends of the candidate pair (`a` is the lower one),
/// - `h`: highest numbered vertex of the component the pair would cut off.
///
/// Vertex numbers start from 1, so a triple with `a == 0` marks the end of a path's segment (EOS).
#[derive(Debug, Clone, Default)]
pub(crate) struct TStack {
    triples: Vec<(usize, usize, usize)>,
}

const EOS: (usize, usize, usize) = (0, 0, 0);

impl TStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, h: usize, a: usize, b: usize) {
        self.triples.push((h, a, b));
    }

    pub fn pop(&mut self) -> Option<(usize, usize, usize)> {
        self.triples.pop()
    }

    pub fn push_eos(&mut self) {
        self.triples.push(EOS);
    }

    /// True if there is no triple above the topmost EOS.
    pub fn is_empty(&self) -> bool {
        self.a() == 0
    }

    pub fn h(&self) -> usize {
        self.triples.last().map_or(0, |t| t.0)
    }

    pub fn a(&self) -> usize {
        self.triples.last().map_or(0, |t| t.1)
    }

    pub fn b(&self) -> usize {
        self.triples.last().map_or(0, |t| t.2)
    }

    /// Pops the triples with `a > cutoff`, returning the highest `h` and the last `b` seen.
    fn pop_above(&mut self, cutoff: usize, mut max_h: usize, mut last_b: usize) -> (usize, usize) {
        while self.a() > cutoff {
            if let Some((h, _, b)) = self.triples.pop() {
                max_h = max_h.max(h);
                last_b = b;
            }
        }
        (max_h, last_b)
    }

    /// A new path starts with a tree arc `v -> w`: `h = w + nd(w) - 1`, `a = lowpt1(w)`, `b = v`.
    pub fn update_for_tree_arc(&mut self, h: usize, a: usize, b: usize) {
        let (max_h, last_b) = self.pop_above(a, h, b);
        self.push(max_h, a, last_b);
        self.push_eos();
    }

    /// A new path starts with a frond `v -> w`.
    pub fn update_for_frond(&mut self, v: usize, w: usize) {
        let (max_h, last_b) = self.pop_above(w, v, v);
        self.push(max_h, w, last_b);
    }

    /// Drops the triples whose component lies entirely below the high point of `v`.
    pub fn pop_until_higher_h(&mut self, v: usize, high_v: usize) {
        while !self.is_empty() && self.a() != v && self.b() != v && self.h() < high_v {
            self.triples.pop();
        }
    }

    /// Drops everything pushed for the current path, including its EOS.
    pub fn pop_until_and_including_eos(&mut self) {
        while !self.is_empty() {
            self.triples.pop();
        }
        self.triples.pop();
    }
}
