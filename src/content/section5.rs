use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static TYPESCRIPT_FUNDAMENTALS: Section = Section {
    title: "TypeScript Fundamentals",
    description: "Adding static types to JavaScript: annotations, inference, objects and functions.",
    lessons: &[
        Lesson {
            title: "Types and Inference",
            description: "What the compiler checks and what it figures out on its own.",
            sections: &[
                SubSection {
                    title: "Primitive types and annotations",
                    explanation: "<p>TypeScript checks JavaScript values against types at compile time and erases them at runtime. Annotate function parameters; let inference handle most local variables.</p>",
                    code_example: Some(
                        r#"let count = 3;            // inferred as number
const title: string = "Dashboard";
let done: boolean = false;

// count = "three";       // error: Type 'string' is not assignable to type 'number'"#,
                    ),
                },
                SubSection {
                    title: "any versus unknown",
                    explanation: "<p><code>any</code> switches type checking off. <code>unknown</code> accepts any value but forces you to narrow it before use, which makes it the safe choice for data from outside the program.</p>",
                    code_example: Some(
                        r#"function parse(json: string): unknown {
  return JSON.parse(json);
}

const value = parse('{"n": 1}');
if (typeof value === "object" && value !== null && "n" in value) {
  console.log(value.n);
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Enable strict mode in tsconfig.json and fix every error it reports in a small JavaScript file converted to .ts.",
            }),
        },
        Lesson {
            title: "Objects, Interfaces and Type Aliases",
            description: "Describing the shape of data.",
            sections: &[
                SubSection {
                    title: "Interfaces",
                    explanation: "<p>An <code>interface</code> describes the properties an object must have. Mark optional properties with <code>?</code> and read-only ones with <code>readonly</code>. TypeScript is <strong>structural</strong>: any object with the right shape fits.</p>",
                    code_example: Some(
                        r#"interface User {
  readonly id: number;
  name: string;
  email?: string;
}

const ada: User = { id: 1, name: "Ada" };"#,
                    ),
                },
                SubSection {
                    title: "Type aliases and unions",
                    explanation: "<p><code>type</code> can name any type, including unions. A union of string literals is a lightweight enum.</p>",
                    code_example: Some(
                        r#"type Status = "idle" | "loading" | "error";

function badge(status: Status): string {
  return status === "error" ? "red" : "grey";
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: None,
        },
        Lesson {
            title: "Functions",
            description: "Typing parameters, return values and callbacks.",
            sections: &[
                SubSection {
                    title: "Function signatures",
                    explanation: "<p>Parameters need annotations; return types are inferred but worth writing on exported functions. Optional and default parameters work as in JavaScript.</p>",
                    code_example: Some(
                        r#"export function formatPrice(amount: number, currency = "USD"): string {
  return new Intl.NumberFormat("en-US", { style: "currency", currency }).format(amount);
}"#,
                    ),
                },
                SubSection {
                    title: "Callback types",
                    explanation: "<p>Function types are written with arrow syntax. Describing the callback precisely lets the compiler check every call site.</p>",
                    code_example: Some(
                        r#"type Listener = (event: { type: string; at: Date }) => void;

function subscribe(listener: Listener): () => void {
  listeners.add(listener);
  return () => listeners.delete(listener);
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Write a typed debounce(fn, ms) helper whose returned function accepts exactly the same parameters as fn.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Convert a small untyped shopping cart module to strict TypeScript.",
        requirements: &[
            "Define interfaces for Product and CartLine",
            "Totals must be computed in integer cents",
            "No use of any",
            "Removing an unknown product id is a no-op rather than an exception",
        ],
        starter_code: r#"// cart.ts
export function addToCart(cart, product, quantity) {
  // TODO
}

export function total(cart) {
  // TODO
}"#,
    }),
};
