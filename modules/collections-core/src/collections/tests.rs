extern crate std;

use alloc::{borrow::ToOwned, string::String, vec, vec::Vec};
use std::sync::{Arc, Mutex};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

use super::{Collection, Filterable, Queue, Stack, queue::QUEUE_TRACE_TARGET, stack::STACK_TRACE_TARGET};

fn drain<C: Collection<i32>>(collection: &mut C) -> Vec<i32> {
  core::iter::from_fn(|| collection.take()).collect()
}

fn exercise_size_accounting<C>(mut collection: C)
where
  C: Collection<i32> + Filterable<i32>, {
  assert!(collection.is_empty());
  collection.add([1, 2, 3, 4, 5, 6]);
  assert_eq!(collection.len(), 6);

  assert!(collection.take().is_some());
  assert_eq!(collection.len(), 5);

  assert!(!collection.remove(&42));
  assert_eq!(collection.len(), 5);

  let removed = collection.filter(|value| *value % 2 == 0);
  assert_eq!(collection.len(), 5 - removed);

  collection.clear();
  assert_eq!(collection.len(), 0);
  assert!(collection.is_empty());
  collection.clear();
  assert!(collection.is_empty());
}

#[test]
fn queue_and_stack_satisfy_size_accounting() {
  exercise_size_accounting(Queue::new());
  exercise_size_accounting(Stack::new());
}

#[test]
fn extraction_order_differs_by_container() {
  let mut queue = Queue::new();
  let mut stack = Stack::new();
  Collection::add(&mut queue, 1..=5);
  Collection::add(&mut stack, 1..=5);

  assert_eq!(drain(&mut queue), vec![1, 2, 3, 4, 5]);
  assert_eq!(drain(&mut stack), vec![5, 4, 3, 2, 1]);
}

#[test]
fn trait_iter_matches_inherent_iter() {
  let queue: Queue<i32> = (1..=3).collect();
  let stack: Stack<i32> = (1..=3).collect();

  assert_eq!(Collection::iter(&queue).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
  assert_eq!(Collection::iter(&stack).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
  assert!(Collection::contains(&queue, &2));
  assert!(Collection::contains(&stack, &3));
}

#[test]
fn remove_direction_differs_by_container() {
  let mut queue: Queue<i32> = [2, 5, 3, 4, 1, 4, 7].into_iter().collect();
  let mut stack: Stack<i32> = [2, 5, 3, 4, 1, 4, 7].into_iter().collect();

  assert!(Filterable::remove(&mut queue, &4));
  assert!(Filterable::remove(&mut stack, &4));

  assert_eq!(Collection::iter(&queue).copied().collect::<Vec<_>>(), vec![2, 5, 3, 1, 4, 7]);
  assert_eq!(Collection::iter(&stack).copied().collect::<Vec<_>>(), vec![2, 5, 3, 4, 1, 7]);
}

#[test]
fn queue_filter_emits_trace_event() {
  let events = capture(|| {
    let mut queue: Queue<i32> = (1..=6).collect();
    queue.filter(|value| *value > 4);
  });

  assert_eq!(events.len(), 1);
  let event = &events[0];
  assert_eq!(event.level, Level::TRACE);
  assert_eq!(event.target, QUEUE_TRACE_TARGET);
  assert_eq!(event.message, "filtered elements");
  assert_eq!(event.fields, vec![("removed".to_owned(), 2), ("len".to_owned(), 4)]);
}

#[test]
fn stack_remove_and_clear_emit_trace_events() {
  let events = capture(|| {
    let mut stack: Stack<i32> = (1..=4).collect();
    stack.remove(&2);
    stack.remove(&9);
    stack.clear();
  });

  assert_eq!(events.len(), 2);
  assert!(events.iter().all(|event| event.target == STACK_TRACE_TARGET));
  assert_eq!(events[0].message, "removed first matching element");
  assert_eq!(events[0].fields, vec![("len".to_owned(), 3)]);
  assert_eq!(events[1].message, "cleared collection");
  assert_eq!(events[1].fields, vec![("released".to_owned(), 3)]);
}

#[test]
fn no_op_mutations_stay_silent() {
  let events = capture(|| {
    let mut queue: Queue<i32> = Queue::new();
    queue.clear();
    queue.filter(|_| true);
    queue.add([1, 2]);
    queue.remove(&3);
    queue.filter(|_| false);
    let _ = queue.take();
  });

  assert!(events.is_empty());
}

fn capture(f: impl FnOnce()) -> Vec<CapturedEvent> {
  let collector = RecordingSubscriber::default();
  with_default(collector.clone(), f);
  collector.events()
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    let captured = CapturedEvent {
      level:   *metadata.level(),
      target:  metadata.target().to_owned(),
      message: visitor.message.unwrap_or_default(),
      fields:  visitor.fields,
    };
    self.events.lock().expect("lock").push(captured);
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug)]
struct CapturedEvent {
  level:   Level,
  target:  String,
  message: String,
  fields:  Vec<(String, u64)>,
}

#[derive(Default)]
struct EventVisitor {
  message: Option<String>,
  fields:  Vec<(String, u64)>,
}

impl Visit for EventVisitor {
  fn record_u64(&mut self, field: &Field, value: u64) {
    self.fields.push((field.name().to_owned(), value));
  }

  fn record_debug(&mut self, field: &Field, value: &dyn core::fmt::Debug) {
    if field.name() == "message" {
      self.message = Some(alloc::format!("{value:?}"));
    }
  }
}
