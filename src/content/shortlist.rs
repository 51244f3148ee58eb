//! Condensed review track. Each section compresses one or two sections of the
//! full curriculum into the points learners most often need to revisit.

use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static CSHARP_ESSENTIALS_REVIEW: Section = Section {
    title: "C# Essentials Review",
    description: "Types, control flow, classes and records in one pass.",
    lessons: &[
        Lesson {
            title: "Types at a Glance",
            description: "Value types, reference types and nullability.",
            sections: &[
                SubSection {
                    title: "Copy semantics",
                    explanation: "<p>Structs and primitives copy on assignment; classes and arrays share a reference. <code>int?</code> makes a value type nullable.</p>",
                    code_example: Some(
                        r#"var p1 = new PointStruct(1, 2);
var p2 = p1;        // independent copy
var list2 = list1;  // same List<T> instance"#,
                    ),
                },
                SubSection {
                    title: "Pattern matching",
                    explanation: "<p>Use switch expressions with relational and property patterns instead of long <code>if</code> chains.</p>",
                    code_example: Some(
                        r#"decimal Shipping(Order o) => o switch
{
    { Total: > 100m } => 0m,
    { Express: true } => 15m,
    _ => 5m,
};"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Rewrite a nested if/else discount calculation as a single switch expression.",
            }),
        },
        Lesson {
            title: "Classes versus Records",
            description: "Choosing the right kind of type.",
            sections: &[SubSection {
                title: "Rules of thumb",
                explanation: "<ul><li>Entities with identity and changing state: <code>class</code></li><li>Immutable data compared by value: <code>record</code></li><li>Small, short-lived values: <code>record struct</code></li></ul>",
                code_example: None,
            }],
            code_example: Some(
                r#"public record Money(decimal Amount, string Currency);
public class Wallet { public List<Money> Funds { get; } = new(); }"#,
            ),
            exercise: None,
        },
    ],
    challenge: None,
};

pub static CSHARP_ASYNC_REVIEW: Section = Section {
    title: "LINQ, Async and APIs Review",
    description: "The collection, async and ASP.NET Core patterns used in every project.",
    lessons: &[
        Lesson {
            title: "LINQ Pipelines",
            description: "Filter, project, group and materialise.",
            sections: &[SubSection {
                title: "Deferred execution",
                explanation: "<p>LINQ queries run when enumerated. Call <code>ToList()</code> once when the result is reused.</p>",
                code_example: Some(
                    r#"var top = orders.Where(o => o.Paid)
                .GroupBy(o => o.Customer)
                .OrderByDescending(g => g.Sum(o => o.Amount))
                .Take(3)
                .ToList();"#,
                ),
            }],
            code_example: None,
            exercise: None,
        },
        Lesson {
            title: "async/await and Minimal APIs",
            description: "Non-blocking handlers end to end.",
            sections: &[
                SubSection {
                    title: "Await everything",
                    explanation: "<p>Return <code>Task</code> all the way up, start independent work before awaiting, and pass a <code>CancellationToken</code> through.</p>",
                    code_example: Some(
                        r#"var (user, orders) = (GetUserAsync(id, ct), GetOrdersAsync(id, ct));
await Task.WhenAll(user, orders);"#,
                    ),
                },
                SubSection {
                    title: "Endpoints",
                    explanation: "<p>Map routes to lambdas, inject services as parameters and return <code>Results</code> helpers for status codes.</p>",
                    code_example: Some(
                        r#"app.MapGet("/users/{id:int}", async (int id, IUserRepo repo, CancellationToken ct) =>
    await repo.FindAsync(id, ct) is { } u ? Results.Ok(u) : Results.NotFound());"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Add a GET endpoint that returns the three most recent orders for a user, using LINQ and async repository calls.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Expose a read-only leaderboard API.",
        requirements: &[
            "GET /leaderboard returns the top ten players by score",
            "Scores are loaded asynchronously from an injected repository",
        ],
        starter_code: r#"app.MapGet("/leaderboard", async (IScoreRepo repo) =>
{
    // TODO
});"#,
    }),
};

pub static TYPESCRIPT_ESSENTIALS_REVIEW: Section = Section {
    title: "TypeScript Essentials Review",
    description: "Annotations, unions, generics and narrowing.",
    lessons: &[Lesson {
        title: "Modelling Data",
        description: "Interfaces, unions and generics together.",
        sections: &[
            SubSection {
                title: "Unions with a discriminant",
                explanation: "<p>Tag each variant with a literal <code>kind</code> and switch on it; the compiler narrows each branch.</p>",
                code_example: Some(
                    r#"type Shape = { kind: "circle"; r: number } | { kind: "square"; side: number };

const area = (s: Shape) => (s.kind === "circle" ? Math.PI * s.r ** 2 : s.side ** 2);"#,
                ),
            },
            SubSection {
                title: "Generics with constraints",
                explanation: "<p>Use <code>K extends keyof T</code> to accept only real property names.</p>",
                code_example: Some(
                    r#"const sortBy = <T, K extends keyof T>(xs: T[], k: K) =>
  [...xs].sort((a, b) => (a[k] < b[k] ? -1 : a[k] > b[k] ? 1 : 0));"#,
                ),
            },
        ],
        code_example: None,
        exercise: Some(Exercise {
            instructions: "Type an API response as a discriminated union of success and failure and write a function that unwraps it.",
        }),
    }],
    challenge: None,
};

pub static REACT_REVIEW: Section = Section {
    title: "React and Integration Review",
    description: "Typed components, hooks and talking to the API.",
    lessons: &[
        Lesson {
            title: "Hooks Checklist",
            description: "The rules that prevent most React bugs.",
            sections: &[SubSection {
                title: "Rules",
                explanation: "<ol><li>Call hooks at the top level only</li><li>List every dependency of an effect</li><li>Clean up subscriptions and requests</li><li>Extract repeated stateful logic into a custom hook</li></ol>",
                code_example: None,
            }],
            code_example: Some(
                r#"useEffect(() => {
  const id = setInterval(tick, 1000);
  return () => clearInterval(id);
}, [tick]);"#,
            ),
            exercise: None,
        },
        Lesson {
            title: "Typed API Access",
            description: "One client module between the UI and HTTP.",
            sections: &[SubSection {
                title: "Client module",
                explanation: "<p>Keep URLs and JSON parsing in <code>api.ts</code> and make its return types match the server DTOs.</p>",
                code_example: Some(
                    r#"export const getUser = (id: number) => request<UserDto>(`/users/${id}`);"#,
                ),
            }],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Build a UserCard component that loads a user through the client module and renders loading, error and success states.",
            }),
        },
    ],
    challenge: None,
};
