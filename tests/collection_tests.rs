use keel::{
    Error, FifoQueue, LinkedList, ListError, Priority, PriorityQueue, Queue, Stack, StackError,
};
use std::collections::VecDeque;

fn drain<Q: FifoQueue<u32> + ?Sized>(queue: &mut Q) -> Vec<u32> {
    let mut out = Vec::new();
    while let Some(item) = queue.dequeue() {
        out.push(item);
    }
    out
}

#[test]
fn test_queue_is_first_in_first_out() {
    let mut q = Queue::new();
    for i in 0..10u32 {
        q.enqueue(i);
    }
    assert_eq!(q.peek(), Some(&0));
    assert_eq!(q.len(), 10);
    assert_eq!(drain(&mut q), (0..10).collect::<Vec<_>>());
    assert!(q.is_empty());
    assert_eq!(q.dequeue(), None);
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut q: Queue<u32> = Queue::new();
    q.enqueue(1);
    q.enqueue(2);
    assert_eq!(q.dequeue(), Some(1));
    q.enqueue(3);
    assert_eq!(q.dequeue(), Some(2));
    assert_eq!(q.dequeue(), Some(3));
    assert_eq!(q.dequeue(), None);
}

#[test]
fn test_every_fifo_agrees() {
    let items = [4u32, 8, 15, 16, 23, 42];
    let queues: Vec<Box<dyn FifoQueue<u32>>> = vec![
        Box::new(Queue::<u32>::new()),
        Box::new(VecDeque::<u32>::new()),
        Box::new(LinkedList::<u32>::new()),
        Box::new(PriorityQueue::<u32>::new()),
    ];

    for mut q in queues {
        for item in items {
            q.enqueue(item);
        }
        assert_eq!(q.len(), items.len());
        assert_eq!(q.peek(), Some(&4));
        assert_eq!(drain(&mut *q), items.to_vec());
        assert!(q.is_empty());
    }
}

#[test]
fn test_priority_queue_serves_high_first() {
    let mut q = PriorityQueue::new();
    q.enqueue("low-1", Priority::Low);
    q.enqueue("high-1", Priority::High);
    q.enqueue("low-2", Priority::Low);
    q.enqueue("high-2", Priority::High);

    assert_eq!(q.len(), 4);
    assert_eq!(q.peek(), Some(&"high-1"));
    assert_eq!(q.dequeue(), Some("high-1"));
    assert_eq!(q.dequeue(), Some("high-2"));

    q.enqueue("high-3", Priority::High);
    assert_eq!(q.dequeue(), Some("high-3"));
    assert_eq!(q.dequeue(), Some("low-1"));
    assert_eq!(q.dequeue(), Some("low-2"));
    assert_eq!(q.dequeue(), None);
    assert!(q.is_empty());
}

#[test]
fn test_stack_is_last_in_first_out_and_bounded() {
    let mut s = Stack::new();
    assert_eq!(s.capacity(), Stack::<u8>::DEFAULT_CAPACITY);

    for i in 1..=5u8 {
        s.push(i).unwrap();
    }
    assert!(s.is_full());
    assert_eq!(s.push(6), Err(StackError::Overflow { capacity: 5 }));
    assert_eq!(s.len(), 5);
    assert_eq!(s.peek(), Some(&5));

    let popped: Vec<u8> = std::iter::from_fn(|| s.pop()).collect();
    assert_eq!(popped, vec![5, 4, 3, 2, 1]);
    assert_eq!(s.pop(), None);
    assert_eq!(s.peek(), None);
}

#[test]
fn test_stack_frees_room_after_pop() {
    let mut s = Stack::with_capacity(1);
    s.push('a').unwrap();
    assert!(s.push('b').is_err());
    assert_eq!(s.pop(), Some('a'));
    s.push('b').unwrap();
    assert_eq!(s.peek(), Some(&'b'));
}

#[test]
fn test_linked_list_end_operations() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.tail(), Some(&3));
    assert_eq!(list.print(), "1 => 2 => 3");

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.print(), "");
}

#[test]
fn test_linked_list_positional_operations() {
    let mut list: LinkedList<i32> = [10, 20, 30].into_iter().collect();

    assert_eq!(list.insert_at(1, 15), Some(&15));
    assert_eq!(list.insert_at(4, 40), Some(&40));
    assert_eq!(list.insert_at(9, 99), None);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 15, 20, 30, 40]);

    assert_eq!(list.get(2), Some(&20));
    *list.get_mut(2).unwrap() = 25;
    assert_eq!(list.find(&25), Some(2));
    assert_eq!(list.find(&99), None);

    assert_eq!(list.remove(4), Some(40));
    assert_eq!(list.tail(), Some(&30));
    assert_eq!(list.remove(0), Some(10));
    assert_eq!(list.remove(7), None);
    assert_eq!(list.print(), "15 => 25 => 30");
}

#[test]
fn test_linked_list_insert_after() {
    let mut list: LinkedList<&str> = ["a", "c"].into_iter().collect();

    list.insert_after(&"a", "b").unwrap();
    list.insert_after(&"c", "d").unwrap();
    assert_eq!(list.print(), "a => b => c => d");
    assert_eq!(list.tail(), Some(&"d"));

    let err = list.insert_after(&"z", "y").unwrap_err();
    assert_eq!(err, ListError::AnchorNotFound);
    assert_eq!(err.to_string(), "previous node not found");
    assert_eq!(list.len(), 4);
}

#[test]
fn test_errors_convert_into_umbrella() {
    fn fill(stack: &mut Stack<u8>, list: &mut LinkedList<u8>) -> keel::Result<()> {
        list.insert_after(&0, 1)?;
        for i in 0..=stack.capacity() {
            stack.push(i as u8)?;
        }
        Ok(())
    }

    let mut stack = Stack::with_capacity(2);
    let mut list = LinkedList::new();
    assert_eq!(
        fill(&mut stack, &mut list),
        Err(Error::List(ListError::AnchorNotFound))
    );

    list.push_back(0);
    let err = fill(&mut stack, &mut list).unwrap_err();
    assert_eq!(err, Error::Stack(StackError::Overflow { capacity: 2 }));
    assert_eq!(err.to_string(), "stack overflow (capacity: 2)");
}
