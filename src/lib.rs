//! Waypoint: a minimal async finite state machine runtime.
//!
//! A machine is a flat set of named states with a single active state and a
//! context value carried across transitions. Events sent to the machine are
//! resolved against the active state's handlers; the resulting transition
//! then runs guards, enter hooks and automatic goto chains to completion.
//!
//! # Core Concepts
//!
//! - **State**: a name from the machine's closed set, via the `State` trait
//! - **Context**: the carried value, shallow-merged with patches
//! - **Guards**: async predicates that admit, reject or redirect a transition
//! - **Enter hooks**: async code run on entry that may replace the context
//! - **Goto**: a follow-up transition taken right after a state is entered
//!
//! # Example
//!
//! ```rust
//! use waypoint::builder::{MachineBuilder, StateBuilder};
//! use waypoint::{context_struct, state_enum};
//!
//! state_enum! {
//!     enum Ui {
//!         Idle,
//!         Loading,
//!         Full,
//!     }
//! }
//!
//! context_struct! {
//!     struct Clicks {
//!         count: u32,
//!     }
//!     patch: ClicksPatch
//! }
//!
//! # futures::executor::block_on(async {
//! let mut machine = MachineBuilder::new(Clicks { count: 0 })
//!     .initial(Ui::Idle)
//!     .state(
//!         Ui::Idle,
//!         StateBuilder::new().handle("CLICK", |ctx: &mut Clicks, _data| {
//!             ctx.count += 1;
//!             Ui::Loading
//!         }),
//!     )
//!     .state(
//!         Ui::Loading,
//!         StateBuilder::new()
//!             .when(|ctx: Clicks| async move { (ctx.count == 2).then_some(Ui::Full) })
//!             .goto(Ui::Idle),
//!     )
//!     .state(Ui::Full, StateBuilder::new())
//!     .build()
//!     .unwrap();
//!
//! machine.start(None).await.unwrap();
//! machine.send("CLICK", None, None).await.unwrap();
//! assert_eq!(machine.current_state(), Some(&Ui::Idle));
//!
//! machine.send("CLICK", None, None).await.unwrap();
//! assert_eq!(machine.current_state(), Some(&Ui::Full));
//! # });
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder};
pub use self::core::{Context, Guard, GuardOutcome, HookError, State};
pub use machine::{Dispatch, Machine, MachineConfig, MachineError, SharedMachine, Snapshot};
