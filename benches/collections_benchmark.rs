use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keel::{LinkedList, Priority, PriorityQueue, Queue, Stack};

fn bench_queues(c: &mut Criterion) {
    let n = 10_000u32;

    c.bench_function("queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut q = Queue::with_capacity(n as usize);
            for i in 0..n {
                q.enqueue(i);
            }
            let mut sum = 0u64;
            while let Some(v) = q.dequeue() {
                sum += u64::from(v);
            }
            black_box(sum)
        });
    });

    c.bench_function("priority_queue_mixed", |b| {
        b.iter(|| {
            let mut q = PriorityQueue::new();
            for i in 0..n {
                let priority = if i % 4 == 0 { Priority::High } else { Priority::Low };
                q.enqueue(i, priority);
            }
            let mut sum = 0u64;
            while let Some(v) = q.dequeue() {
                sum += u64::from(v);
            }
            black_box(sum)
        });
    });
}

fn bench_linked_list(c: &mut Criterion) {
    let n = 1000u32;

    c.bench_function("linked_list_push_pop", |b| {
        b.iter(|| {
            let mut list = LinkedList::with_capacity(n as usize);
            for i in 0..n {
                list.push_back(i);
            }
            while let Some(v) = list.pop_front() {
                black_box(v);
            }
        });
    });

    c.bench_function("linked_list_get_by_index", |b| {
        let list: LinkedList<u32> = (0..n).collect();
        b.iter(|| black_box(list.get(black_box(n as usize / 2))));
    });

    c.bench_function("linked_list_insert_after", |b| {
        b.iter(|| {
            let mut list: LinkedList<u32> = (0..64).collect();
            for i in 0..64 {
                list.insert_after(&i, i + 1000).unwrap();
            }
            black_box(list.len())
        });
    });
}

fn bench_stack(c: &mut Criterion) {
    c.bench_function("stack_push_pop", |b| {
        b.iter(|| {
            let mut stack = Stack::with_capacity(1024);
            for i in 0..1024u32 {
                stack.push(i).unwrap();
            }
            while let Some(v) = stack.pop() {
                black_box(v);
            }
        });
    });
}

criterion_group!(benches, bench_queues, bench_linked_list, bench_stack);
criterion_main!(benches);
