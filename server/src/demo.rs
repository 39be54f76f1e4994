//! Sample todos loaded at startup when `store.seed_demo_data` is set.

use todo_core::{NewTodo, TodoStore};

pub const DEMO_AUTHOR: &str = "Anonymous";

const DEMO_TODOS: &[&str] = &[
    "Water the fern on the windowsill before it gives up entirely.",
    "Return the library book that has been on the nightstand since spring.",
    "Find out why the kitchen tap drips only at night.",
    "Write the thank-you note for the birthday socks.",
    "Back up the photo folder to the external drive.",
    "Call the dentist and finally book that checkup.",
    "Sort the drawer of mystery cables and keep at most three.",
    "Replace the smoke alarm battery that chirps at 3am.",
    "Learn the chords for the one song everyone requests.",
    "Defrost the freezer before it becomes a glacier.",
    "Renew the bike lock key that only works when jiggled.",
    "Plant the tomato seedlings once the frost is gone.",
    "Unsubscribe from the newsletters nobody remembers signing up for.",
    "Patch the hole in the garden hose with actual tape this time.",
    "Label the spice jars that all look like paprika.",
    "Try the bread recipe that needs a three-day starter.",
    "Fix the squeaky hinge on the hallway door.",
    "Print the boarding passes the night before, not at the gate.",
    "Measure the window for the curtains that never get bought.",
    "Check the tyre pressure before the long drive.",
    "Donate the coats that have not been worn in two winters.",
    "Clean the keyboard, crumbs and all.",
    "Read the manual for the oven's mysterious fourth setting.",
    "Hang the picture that has leaned against the wall for a year.",
    "Make a list of the lists that need making.",
];

/// Append the sample todos to `store` and return how many were added.
pub fn seed(store: &mut TodoStore) -> usize {
    for details in DEMO_TODOS {
        store.create(NewTodo::new(DEMO_AUTHOR, *details));
    }
    DEMO_TODOS.len()
}
