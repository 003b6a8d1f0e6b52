//! Exercises 21-25: render memoization.
//!
//! Each preview pairs a frequently changing piece of state with a
//! memoized render that must not recompute when the unrelated piece
//! changes. The memo's computation count is the observable stand-in for
//! a render count.

use std::time::Duration;

use chrono::Timelike;
use reflex::memo::Memo;
use reflex::state::State;
use reflex::ticker::Ticker;

/// Exercise 21: the parent counter re-renders freely; the child greeting
/// is memoized on the name it receives.
#[derive(Debug, Clone)]
pub struct MemoizedChild {
    counter: State<i32>,
    name: State<String>,
    child: Memo<String, String>,
}

impl MemoizedChild {
    pub fn new(name: impl Into<String>) -> Self {
        let name = State::new(name.into());
        let child = Memo::new(&name, |n| format!("Hello, {n}!"));
        Self {
            counter: State::default(),
            name,
            child,
        }
    }

    pub fn click_counter(&self) {
        self.counter.update(|c| *c += 1);
    }

    pub fn rename(&self, name: impl Into<String>) {
        self.name.set(name.into());
    }

    /// The child's rendered output.
    pub fn child_line(&self) -> String {
        self.child.get()
    }

    /// How many times the child actually re-rendered.
    pub fn child_renders(&self) -> u64 {
        self.child.computations()
    }
}

/// Exercise 22: a memoized item list next to an unrelated counter.
#[derive(Debug, Clone)]
pub struct MemoizedList {
    counter: State<i32>,
    items: State<Vec<String>>,
    rendered: Memo<Vec<String>, Vec<String>>,
}

impl MemoizedList {
    pub fn new(items: impl IntoIterator<Item = &'static str>) -> Self {
        let items = State::new(items.into_iter().map(str::to_string).collect::<Vec<_>>());
        let rendered = Memo::new(&items, |items| {
            items.iter().map(|item| format!("- {item}")).collect()
        });
        Self {
            counter: State::default(),
            items,
            rendered,
        }
    }

    pub fn click_counter(&self) {
        self.counter.update(|c| *c += 1);
    }

    pub fn counter(&self) -> i32 {
        self.counter.get()
    }

    pub fn add_item(&self, item: impl Into<String>) {
        self.items.update(|items| items.push(item.into()));
    }

    pub fn lines(&self) -> Vec<String> {
        self.rendered.get()
    }

    pub fn list_renders(&self) -> u64 {
        self.rendered.computations()
    }
}

/// Exercise 23: the "heavy calculation" — a sum over 1..=n, memoized on n.
#[derive(Debug, Clone)]
pub struct HeavyCalculation {
    n: State<u64>,
    result: Memo<u64, u64>,
}

impl HeavyCalculation {
    pub fn new(n: u64) -> Self {
        let n = State::new(n);
        let result = Memo::new(&n, |n| (1..=*n).sum());
        Self { n, result }
    }

    pub fn set_input(&self, n: u64) {
        self.n.set(n);
    }

    pub fn result(&self) -> u64 {
        self.result.get()
    }

    pub fn computations(&self) -> u64 {
        self.result.computations()
    }
}

/// One todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub done: bool,
}

/// Todo summary shown below the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// Exercise 24: todo list with add/toggle/delete and memoized stats.
#[derive(Debug, Clone)]
pub struct TodoApp {
    todos: State<Vec<Todo>>,
    next_id: State<u32>,
    stats: Memo<Vec<Todo>, TodoStats>,
}

impl TodoApp {
    pub fn new() -> Self {
        let todos: State<Vec<Todo>> = State::default();
        let stats = Memo::new(&todos, |todos| {
            let completed = todos.iter().filter(|t| t.done).count();
            TodoStats {
                total: todos.len(),
                completed,
                remaining: todos.len() - completed,
            }
        });
        Self {
            todos,
            next_id: State::new(1),
            stats,
        }
    }

    pub fn add(&self, text: impl Into<String>) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let todo = Todo {
            id,
            text: text.into(),
            done: false,
        };
        self.todos.update(|todos| todos.push(todo));
        id
    }

    pub fn toggle(&self, id: u32) {
        self.todos.update(|todos| {
            if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                todo.done = !todo.done;
            }
        });
    }

    pub fn delete(&self, id: u32) {
        self.todos.update(|todos| todos.retain(|t| t.id != id));
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.get()
    }

    pub fn stats(&self) -> TodoStats {
        self.stats.get()
    }

    pub fn stats_computations(&self) -> u64 {
        self.stats.computations()
    }
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Exercise 25: a live clock whose header never re-renders.
///
/// The time line follows the ticker; the header is memoized on state that
/// never changes, so its render count stays at one for the life of the
/// view. Dropping the clock unregisters the tick.
pub struct LiveClock {
    ticker: Ticker,
    header: Memo<&'static str, String>,
}

impl LiveClock {
    /// Start a clock ticking once per second.
    pub fn start() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    /// Start a clock with a custom tick period.
    pub fn with_period(period: Duration) -> Self {
        let title: State<&'static str> = State::new("UI Fundamentals Explorer");
        let header = Memo::new(&title, |title| format!("{title} (this header is memoized)"));
        Self {
            ticker: Ticker::start(period),
            header,
        }
    }

    /// The static, memoized header line.
    pub fn header(&self) -> String {
        self.header.get()
    }

    pub fn header_renders(&self) -> u64 {
        self.header.computations()
    }

    /// The live "HH:MM:SS" time line.
    pub fn time_line(&self) -> String {
        let now = self.ticker.now();
        format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
    }

    /// Teardown: unregister the periodic callback.
    pub fn stop(&self) {
        self.ticker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_ignores_parent_counter() {
        let preview = MemoizedChild::new("Ada");
        assert_eq!(preview.child_line(), "Hello, Ada!");
        for _ in 0..50 {
            preview.click_counter();
            preview.child_line();
        }
        assert_eq!(preview.child_renders(), 1);

        preview.rename("Grace");
        assert_eq!(preview.child_line(), "Hello, Grace!");
        assert_eq!(preview.child_renders(), 2);
    }

    #[test]
    fn test_list_rerenders_only_when_items_change() {
        let preview = MemoizedList::new(["alpha", "beta"]);
        assert_eq!(preview.lines(), ["- alpha", "- beta"]);
        preview.click_counter();
        preview.click_counter();
        preview.lines();
        assert_eq!(preview.list_renders(), 1);

        preview.add_item("gamma");
        assert_eq!(preview.lines().len(), 3);
        assert_eq!(preview.list_renders(), 2);
    }

    #[test]
    fn test_heavy_calculation_caches() {
        let heavy = HeavyCalculation::new(1000);
        assert_eq!(heavy.result(), 500_500);
        heavy.result();
        heavy.result();
        assert_eq!(heavy.computations(), 1);

        heavy.set_input(10);
        assert_eq!(heavy.result(), 55);
        assert_eq!(heavy.computations(), 2);
    }

    #[test]
    fn test_todo_lifecycle_and_stats() {
        let app = TodoApp::new();
        let a = app.add("write tests");
        let b = app.add("refactor");
        app.toggle(a);

        assert_eq!(
            app.stats(),
            TodoStats {
                total: 2,
                completed: 1,
                remaining: 1
            }
        );

        app.delete(b);
        assert_eq!(app.stats().total, 1);
        // Reading stats twice without mutations computes once.
        app.stats();
        assert_eq!(app.stats_computations(), 2);
    }

    #[tokio::test]
    async fn test_clock_header_never_rerenders() {
        let clock = LiveClock::with_period(Duration::from_millis(10));
        assert!(clock.header().contains("memoized"));
        tokio::time::sleep(Duration::from_millis(50)).await;
        clock.header();
        clock.header();
        assert_eq!(clock.header_renders(), 1);
        clock.stop();
    }
}
