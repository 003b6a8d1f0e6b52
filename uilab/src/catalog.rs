//! Static lesson metadata.
//!
//! The thirty exercises, five per topic, in course order. The live model
//! behind each preview lives in [`crate::exercises`].

use serde::Serialize;

/// Course topic, five exercises each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topic {
    /// Building and composing components (1-5).
    Composition,
    /// Event handling and user interactions (6-10).
    Events,
    /// Building and validating forms (11-15).
    Forms,
    /// Navigating between pages (16-20).
    Routing,
    /// Preventing unnecessary re-renders (21-25).
    Memoization,
    /// Specialized registration forms (26-30).
    Registration,
}

/// One lesson page: number, instructional metadata and topic.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    /// 1-based exercise number.
    pub number: u8,
    /// Lesson title.
    pub title: &'static str,
    /// One-line description shown in the index.
    pub description: &'static str,
    /// Step-by-step instructions shown above the preview.
    pub instructions: &'static [&'static str],
    /// Course topic.
    pub topic: Topic,
}

/// All thirty exercises in course order.
pub fn all() -> &'static [Exercise] {
    CATALOG
}

/// Look up an exercise by number.
pub fn by_number(number: u8) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.number == number)
}

/// All exercises in one topic, in course order.
pub fn by_topic(topic: Topic) -> impl Iterator<Item = &'static Exercise> {
    CATALOG.iter().filter(move |e| e.topic == topic)
}

static CATALOG: &[Exercise] = &[
    Exercise {
        number: 1,
        title: "Welcome & Date Component",
        description: "Create two functional components: one that displays a welcome message and another that shows the current date.",
        instructions: &[
            "Create a component that renders a welcome message",
            "Create a second component that shows today's date",
            "Compose both components on one page",
        ],
        topic: Topic::Composition,
    },
    Exercise {
        number: 2,
        title: "Parent-Child Hobbies List",
        description: "Build a parent component with a list of hobbies and a child component that displays each hobby.",
        instructions: &[
            "Declare the hobby list in the parent component",
            "Pass each hobby to a child component as a property",
            "Render one child per hobby",
        ],
        topic: Topic::Composition,
    },
    Exercise {
        number: 3,
        title: "Reusable Button Component",
        description: "Create a reusable button component that accepts customizable text and color props.",
        instructions: &[
            "Accept label and variant as properties",
            "Map each variant to its visual style",
            "Render several buttons from the one component",
        ],
        topic: Topic::Composition,
    },
    Exercise {
        number: 4,
        title: "Profile Card Component",
        description: "Build a profile card component displaying a name, role and short bio from props.",
        instructions: &[
            "Accept name, role and bio as properties",
            "Lay out the card with a header and body",
            "Render two cards with different data",
        ],
        topic: Topic::Composition,
    },
    Exercise {
        number: 5,
        title: "List Mapping Component",
        description: "Build a component to display a list of items using the .map() function.",
        instructions: &[
            "Declare a list of items",
            "Map every item to a rendered row",
            "Give each row a stable key",
        ],
        topic: Topic::Composition,
    },
    Exercise {
        number: 6,
        title: "Toggle ON/OFF Button",
        description: "Create a button that toggles between 'ON' and 'OFF' states when clicked.",
        instructions: &[
            "Track the on/off state",
            "Flip the state on every click",
            "Show the current state as the button label",
        ],
        topic: Topic::Events,
    },
    Exercise {
        number: 7,
        title: "Counter Component",
        description: "Build a counter with increment and decrement buttons that colors the count by its sign.",
        instructions: &[
            "Track the count in state",
            "Wire increment and decrement click handlers",
            "Classify the count as negative, neutral or positive",
        ],
        topic: Topic::Events,
    },
    Exercise {
        number: 8,
        title: "Hover Color Change",
        description: "Create a component that changes the background color of a div when hovered over.",
        instructions: &[
            "Track whether the pointer is over the element",
            "Handle mouse-enter and mouse-leave events",
            "Swap the background color based on the hover state",
        ],
        topic: Topic::Events,
    },
    Exercise {
        number: 9,
        title: "Form Submit Logger",
        description: "Build a form that logs the user's input to the console when submitted.",
        instructions: &[
            "Track the input value in state",
            "Prevent the default submit behavior",
            "Append each submitted value to a visible log",
        ],
        topic: Topic::Events,
    },
    Exercise {
        number: 10,
        title: "Dropdown Menu",
        description: "Create a dropdown menu component that shows and hides options when clicked.",
        instructions: &[
            "Track whether the menu is open",
            "Toggle the menu on trigger click",
            "Close the menu when an option is selected",
        ],
        topic: Topic::Events,
    },
    Exercise {
        number: 11,
        title: "Simple Login Form",
        description: "Create a simple login form with fields for username and password.",
        instructions: &[
            "Track username and password in state",
            "Submit only when both fields are filled",
            "Show a login-attempt message with the username",
        ],
        topic: Topic::Forms,
    },
    Exercise {
        number: 12,
        title: "Controlled Input Form",
        description: "Build a controlled input whose value lives in state, with a live character count.",
        instructions: &[
            "Bind the input value to state",
            "Update state on every keystroke",
            "Show character count for extra functionality",
        ],
        topic: Topic::Forms,
    },
    Exercise {
        number: 13,
        title: "Form with Validation",
        description: "Design a form with validation for email and password fields.",
        instructions: &[
            "Create state for email, password, and errors",
            "Use regex to validate email format",
            "Check password length (minimum 8 characters)",
            "Display error messages when validation fails",
            "Clear errors when user starts typing",
            "Show success message when form is valid",
        ],
        topic: Topic::Forms,
    },
    Exercise {
        number: 14,
        title: "Multi-Step Form",
        description: "Create a multi-step form where users can fill in details step-by-step.",
        instructions: &[
            "Create state for current step (number) and form data (object)",
            "Store all form fields in a single formData object",
            "Use conditional rendering to show different steps",
            "Create navigation buttons (Next/Back)",
            "Add a progress bar to show completion status",
            "Preserve form data when moving between steps",
        ],
        topic: Topic::Forms,
    },
    Exercise {
        number: 15,
        title: "Checkbox Form",
        description: "Build a form with multiple checkbox inputs and display the selected options.",
        instructions: &[
            "Render one checkbox per option",
            "Track the selected options in state",
            "List the currently selected labels below the form",
        ],
        topic: Topic::Forms,
    },
    Exercise {
        number: 16,
        title: "Basic Router Setup",
        description: "Set up a router with home and about pages.",
        instructions: &[
            "Declare a route per page",
            "Resolve the current path to a page",
            "Render the matched page",
        ],
        topic: Topic::Routing,
    },
    Exercise {
        number: 17,
        title: "Dynamic Product Route",
        description: "Create a dynamic route that renders product details from a path parameter.",
        instructions: &[
            "Declare a route with an :id parameter",
            "Extract the parameter from the matched path",
            "Look up and render the product by id",
        ],
        topic: Topic::Routing,
    },
    Exercise {
        number: 18,
        title: "Navigation Bar",
        description: "Build a navigation bar that highlights the link for the active route.",
        instructions: &[
            "Track the current path in state",
            "Navigate by updating the path",
            "Highlight the link whose route is active",
        ],
        topic: Topic::Routing,
    },
    Exercise {
        number: 19,
        title: "404 Not Found Page",
        description: "Add a catch-all route that renders a not-found page for unknown paths.",
        instructions: &[
            "Declare the known routes first",
            "Add a wildcard route last",
            "Render the not-found page for any unmatched path",
        ],
        topic: Topic::Routing,
    },
    Exercise {
        number: 20,
        title: "Nested Blog Routes",
        description: "Implement nested routes for a blog with a main blog page and individual post pages.",
        instructions: &[
            "Declare an index route for the post list",
            "Declare a child route with a post id parameter",
            "Render the list or a single post based on the match",
        ],
        topic: Topic::Routing,
    },
    Exercise {
        number: 21,
        title: "Prevent Child Re-render",
        description: "Create a parent component that passes a property to a child component, memoized so the child never re-renders unnecessarily.",
        instructions: &[
            "Keep the parent's counter and the child's property in separate state",
            "Memoize the child render on its property",
            "Verify the child does not re-render when the counter changes",
        ],
        topic: Topic::Memoization,
    },
    Exercise {
        number: 22,
        title: "Memoized List Optimization",
        description: "Display a counter next to a memoized list of unrelated items that must not re-render with it.",
        instructions: &[
            "Render the list from its own state",
            "Memoize the list render",
            "Confirm counter clicks leave the list render count unchanged",
        ],
        topic: Topic::Memoization,
    },
    Exercise {
        number: 23,
        title: "Heavy Calculation Memo",
        description: "Create a 'heavy calculation' component that recomputes only when its input changes.",
        instructions: &[
            "Derive the expensive result from one input state",
            "Memoize the computation",
            "Observe the recompute count while changing unrelated state",
        ],
        topic: Topic::Memoization,
    },
    Exercise {
        number: 24,
        title: "Todo List Optimization",
        description: "Build a todo list with add, toggle and delete, with memoized summary statistics.",
        instructions: &[
            "Track the todo items in state",
            "Implement add, toggle and delete",
            "Memoize the remaining/completed summary",
        ],
        topic: Topic::Memoization,
    },
    Exercise {
        number: 25,
        title: "Live Time with Memo",
        description: "Implement a component that shows live time updates but prevents unnecessary re-renders of static UI parts.",
        instructions: &[
            "Drive the time display from a periodic tick",
            "Keep the header static and memoized",
            "Unregister the tick on teardown",
        ],
        topic: Topic::Memoization,
    },
    Exercise {
        number: 26,
        title: "Lecturer Registration",
        description: "Create a lecturer registration form with name, email, subject and phone, validating email format and numeric phone.",
        instructions: &[
            "Require every field",
            "Validate the email format",
            "Require a numeric phone of at least 10 digits",
            "Show all failures at once on submit",
        ],
        topic: Topic::Registration,
    },
    Exercise {
        number: 27,
        title: "Student Registration",
        description: "Create a student registration form with names, email, student ID and date of birth, validating the alphanumeric student ID.",
        instructions: &[
            "Require every field",
            "Validate the email format",
            "Require an alphanumeric student ID of at least 6 characters",
            "Show all failures at once on submit",
        ],
        topic: Topic::Registration,
    },
    Exercise {
        number: 28,
        title: "Driver Registration",
        description: "Create a driver registration form with name, license number, phone and vehicle type.",
        instructions: &[
            "Require every field",
            "Require a numeric phone of at least 10 digits",
            "Show all failures at once on submit",
        ],
        topic: Topic::Registration,
    },
    Exercise {
        number: 29,
        title: "Book Registration",
        description: "Create a book registration form with title, author, ISBN and published year, validating the four-digit year.",
        instructions: &[
            "Require every field",
            "Require a four-digit published year",
            "Bound the year between 1000 and ten years from now",
            "Show all failures at once on submit",
        ],
        topic: Topic::Registration,
    },
    Exercise {
        number: 30,
        title: "Module Registration Form",
        description: "Create a registration form for modules with fields: Module Name, Module Code, Description, Credits. Ensure the Credits field accepts only numeric values and is required.",
        instructions: &[
            "Require every field",
            "Require credits to be numeric and greater than zero",
            "Show all failures at once on submit",
        ],
        topic: Topic::Registration,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_thirty_numbered_exercises() {
        assert_eq!(all().len(), 30);
        for (index, exercise) in all().iter().enumerate() {
            assert_eq!(exercise.number as usize, index + 1);
            assert!(!exercise.instructions.is_empty());
        }
    }

    #[test]
    fn test_five_exercises_per_topic() {
        for topic in [
            Topic::Composition,
            Topic::Events,
            Topic::Forms,
            Topic::Routing,
            Topic::Memoization,
            Topic::Registration,
        ] {
            assert_eq!(by_topic(topic).count(), 5, "{topic:?}");
        }
    }

    #[test]
    fn test_lookup_by_number() {
        assert_eq!(by_number(14).unwrap().title, "Multi-Step Form");
        assert!(by_number(0).is_none());
        assert!(by_number(31).is_none());
    }
}
