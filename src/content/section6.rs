use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static TYPESCRIPT_ADVANCED_TYPES: Section = Section {
    title: "Advanced TypeScript Types",
    description: "Generics, narrowing and type-level tools for modelling real application data.",
    lessons: &[
        Lesson {
            title: "Generics",
            description: "Writing code that works for many types without losing type information.",
            sections: &[
                SubSection {
                    title: "Generic functions",
                    explanation: "<p>A type parameter links the types of inputs and outputs. <code>first&lt;T&gt;</code> returns the element type of whatever array it receives.</p>",
                    code_example: Some(
                        r#"function first<T>(items: T[]): T | undefined {
  return items[0];
}

const n = first([1, 2, 3]);      // number | undefined
const s = first(["a", "b"]);     // string | undefined"#,
                    ),
                },
                SubSection {
                    title: "Constraints",
                    explanation: "<p><code>extends</code> limits what a type parameter can be, so the body can rely on the constrained members. <code>keyof</code> produces the union of an object type's keys.</p>",
                    code_example: Some(
                        r#"function pluck<T, K extends keyof T>(items: T[], key: K): T[K][] {
  return items.map((item) => item[key]);
}

const names = pluck(users, "name");   // string[]"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Write a generic groupBy<T, K extends PropertyKey>(items: T[], key: (item: T) => K): Record<K, T[]>.",
            }),
        },
        Lesson {
            title: "Narrowing and Discriminated Unions",
            description: "Letting control flow refine types.",
            sections: &[
                SubSection {
                    title: "Type guards",
                    explanation: "<p><code>typeof</code>, <code>instanceof</code>, <code>in</code> and equality checks narrow a union inside a branch. A function returning <code>value is T</code> is a user-defined type guard.</p>",
                    code_example: Some(
                        r#"function isString(value: unknown): value is string {
  return typeof value === "string";
}"#,
                    ),
                },
                SubSection {
                    title: "Discriminated unions",
                    explanation: "<p>Give every member of a union a literal <code>kind</code> property. Switching on it narrows to the exact member, and a <code>never</code> check makes the switch exhaustive.</p>",
                    code_example: Some(
                        r#"type Result<T> =
  | { kind: "ok"; value: T }
  | { kind: "err"; error: string };

function unwrap<T>(r: Result<T>): T {
  switch (r.kind) {
    case "ok":
      return r.value;
    case "err":
      throw new Error(r.error);
    default: {
      const unreachable: never = r;
      return unreachable;
    }
  }
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Model a network request as idle, loading, success and failure states with a discriminated union and write an exhaustive render function.",
            }),
        },
        Lesson {
            title: "Utility and Mapped Types",
            description: "Deriving new types from existing ones.",
            sections: &[
                SubSection {
                    title: "Built-in utility types",
                    explanation: "<p><code>Partial</code>, <code>Required</code>, <code>Pick</code>, <code>Omit</code> and <code>Record</code> cover most day-to-day transformations. Derive update payloads from the entity type instead of duplicating it.</p>",
                    code_example: Some(
                        r#"interface Todo {
  id: number;
  title: string;
  done: boolean;
}

type NewTodo = Omit<Todo, "id">;
type TodoPatch = Partial<NewTodo>;"#,
                    ),
                },
                SubSection {
                    title: "Mapped types",
                    explanation: "<p>A mapped type iterates over keys with <code>in keyof</code>. Modifiers like <code>readonly</code> and <code>?</code> can be added or removed with <code>+</code> and <code>-</code>.</p>",
                    code_example: Some(
                        r#"type Mutable<T> = { -readonly [K in keyof T]: T[K] };
type Getters<T> = { [K in keyof T as `get${Capitalize<string & K>}`]: () => T[K] };"#,
                    ),
                },
            ],
            code_example: None,
            exercise: None,
        },
    ],
    challenge: Some(Challenge {
        description: "Write a type-safe event emitter.",
        requirements: &[
            "The emitter is generic over a map from event name to payload type",
            "on() only accepts known event names and correctly typed handlers",
            "emit() rejects payloads of the wrong type at compile time",
            "on() returns an unsubscribe function",
        ],
        starter_code: r#"type Events = {
  login: { userId: number };
  logout: undefined;
};

class Emitter<E extends Record<string, unknown>> {
  // TODO
}"#,
    }),
};
