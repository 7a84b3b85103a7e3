use {
    super::{FifoQueue, MinCostQueue, OpenSetElement},
    num::Zero,
    std::{collections::HashSet, hash::Hash, ops::Add},
};

pub struct BreadthFirstSearchState<V> {
    queue: FifoQueue<V>,
    explored: HashSet<V>,
    neighbors: Vec<V>,
}

impl<V> BreadthFirstSearchState<V> {
    fn clear(&mut self) {
        self.queue.clear();
        self.explored.clear();
        self.neighbors.clear();
    }
}

impl<V> Default for BreadthFirstSearchState<V> {
    fn default() -> Self {
        Self {
            queue: Default::default(),
            explored: Default::default(),
            neighbors: Default::default(),
        }
    }
}

/// An implementation of https://en.wikipedia.org/wiki/Breadth-first_search
///
/// Vertices are marked explored when enqueued, so each enters the queue at most once.
pub trait BreadthFirstSearch {
    type Vertex: Clone + Eq + Hash;

    fn start(&self) -> &Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;
    fn path_to(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
    fn neighbors(&self, vertex: &Self::Vertex, neighbors: &mut Vec<Self::Vertex>);
    fn update_parent(&mut self, from: &Self::Vertex, to: &Self::Vertex);
    fn reset(&mut self);

    fn run_internal(
        &mut self,
        state: &mut BreadthFirstSearchState<Self::Vertex>,
    ) -> Option<Vec<Self::Vertex>> {
        self.reset();

        state.clear();

        let start: Self::Vertex = self.start().clone();
        state.explored.insert(start.clone());
        state.queue.enqueue(start);

        while let Some(current) = state.queue.dequeue() {
            if self.is_end(&current) {
                return Some(self.path_to(&current));
            }

            self.neighbors(&current, &mut state.neighbors);

            for neighbor in state.neighbors.drain(..) {
                if state.explored.insert(neighbor.clone()) {
                    self.update_parent(&current, &neighbor);
                    state.queue.enqueue(neighbor);
                }
            }
        }

        None
    }

    fn run(&mut self) -> Option<Vec<Self::Vertex>> {
        self.run_internal(&mut BreadthFirstSearchState::default())
    }
}

pub struct WeightedGraphSearchState<V, C> {
    open_set: MinCostQueue<V, C>,
    neighbors: Vec<OpenSetElement<V, C>>,
}

impl<V, C: Ord> WeightedGraphSearchState<V, C> {
    fn clear(&mut self) {
        self.open_set.clear();
        self.neighbors.clear();
    }
}

impl<V, C: Ord> Default for WeightedGraphSearchState<V, C> {
    fn default() -> Self {
        Self {
            open_set: Default::default(),
            neighbors: Default::default(),
        }
    }
}

pub fn zero_heuristic<W: WeightedGraphSearch + ?Sized>(
    _search: &W,
    _vertex: &W::Vertex,
) -> W::Cost {
    W::Cost::zero()
}

/// An implementation of https://en.wikipedia.org/wiki/A*_search_algorithm /
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Relaxing a vertex pushes a fresh open set element instead of re-keying the one already in the
/// queue. Stale elements are detected on pop, when their priority exceeds the vertex's current
/// best cost, and skipped.
pub trait WeightedGraphSearch {
    type Vertex: Clone + Eq + Hash;
    type Cost: Add<Self::Cost, Output = Self::Cost> + Clone + Ord + Sized + Zero;

    fn start(&self) -> &Self::Vertex;
    fn is_end(&self, vertex: &Self::Vertex) -> bool;
    fn path_to(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
    fn cost_from_start(&self, vertex: &Self::Vertex) -> Self::Cost;
    fn heuristic(&self, vertex: &Self::Vertex) -> Self::Cost;

    /// The cost is from `vertex` to the neighbor.
    fn neighbors(
        &self,
        vertex: &Self::Vertex,
        neighbors: &mut Vec<OpenSetElement<Self::Vertex, Self::Cost>>,
    );

    /// `heuristic` may be zero if this is called by Dijkstra.
    fn update_vertex(
        &mut self,
        from: &Self::Vertex,
        to: &Self::Vertex,
        cost: Self::Cost,
        heuristic: Self::Cost,
    );
    fn reset(&mut self);

    fn run_internal<F: Fn(&Self, &Self::Vertex) -> Self::Cost>(
        &mut self,
        state: &mut WeightedGraphSearchState<Self::Vertex, Self::Cost>,
        heuristic: F,
    ) -> Option<Vec<Self::Vertex>> {
        self.reset();
        state.clear();

        let start: Self::Vertex = self.start().clone();
        let start_priority: Self::Cost = self.cost_from_start(&start) + heuristic(self, &start);

        state.open_set.push(start, start_priority);

        while let Some(OpenSetElement(current, priority)) = state.open_set.pop() {
            let start_to_current: Self::Cost = self.cost_from_start(&current);

            if priority > start_to_current.clone() + heuristic(self, &current) {
                // A cheaper element for this vertex was already popped.
                continue;
            }

            if self.is_end(&current) {
                return Some(self.path_to(&current));
            }

            self.neighbors(&current, &mut state.neighbors);

            for OpenSetElement(neighbor, neighbor_cost) in state.neighbors.drain(..) {
                let start_to_neighbor: Self::Cost = start_to_current.clone() + neighbor_cost;

                if start_to_neighbor < self.cost_from_start(&neighbor) {
                    let neighbor_heuristic: Self::Cost = heuristic(self, &neighbor);

                    self.update_vertex(
                        &current,
                        &neighbor,
                        start_to_neighbor.clone(),
                        neighbor_heuristic.clone(),
                    );
                    state
                        .open_set
                        .push(neighbor, start_to_neighbor + neighbor_heuristic);
                }
            }
        }

        None
    }

    fn run_a_star(&mut self) -> Option<Vec<Self::Vertex>> {
        self.run_internal(&mut WeightedGraphSearchState::default(), Self::heuristic)
    }

    fn run_dijkstra(&mut self) -> Option<Vec<Self::Vertex>> {
        self.run_internal(&mut WeightedGraphSearchState::default(), zero_heuristic)
    }
}
