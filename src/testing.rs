use crate::priority_queue::PriorityQueue;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Checks that every entry's priority is no lower than its parent's.
pub fn assert_heap_order<T>(queue: &PriorityQueue<T>) {
    let priorities: Vec<i32> = queue.entries().map(|e| e.priority()).collect();
    for child in 1..priorities.len() {
        let parent = (child - 1) / 2;
        assert!(
            priorities[parent] <= priorities[child],
            "heap order violated: [{}] p={} is the parent of [{}] p={}, heap: {:?}",
            parent,
            priorities[parent],
            child,
            priorities[child],
            priorities
        );
    }
}
