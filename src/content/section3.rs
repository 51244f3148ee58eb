use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static CSHARP_COLLECTIONS: Section = Section {
    title: "Collections, Generics and LINQ",
    description: "Working with groups of values safely and declaratively.",
    lessons: &[
        Lesson {
            title: "Generic Collections",
            description: "List, Dictionary and HashSet, and how generics keep them type-safe.",
            sections: &[
                SubSection {
                    title: "List and Dictionary",
                    explanation: "<p><code>List&lt;T&gt;</code> is a growable array. <code>Dictionary&lt;TKey, TValue&gt;</code> maps keys to values with fast lookup. Use <code>TryGetValue</code> instead of catching <code>KeyNotFoundException</code>.</p>",
                    code_example: Some(
                        r#"var names = new List<string> { "Ada", "Grace" };
names.Add("Linus");

var ages = new Dictionary<string, int> { ["Ada"] = 36 };
if (ages.TryGetValue("Grace", out var age))
{
    Console.WriteLine(age);
}"#,
                    ),
                },
                SubSection {
                    title: "Writing generic methods",
                    explanation: "<p>Type parameters let one method work for many types. Constraints such as <code>where T : IComparable&lt;T&gt;</code> tell the compiler which operations are allowed on <code>T</code>.</p>",
                    code_example: Some(
                        r#"static T Largest<T>(IEnumerable<T> items) where T : IComparable<T>
{
    T best = items.First();
    foreach (var item in items)
    {
        if (item.CompareTo(best) > 0) best = item;
    }
    return best;
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Count word frequencies in a paragraph with a Dictionary<string, int>, ignoring case, and print the five most common words.",
            }),
        },
        Lesson {
            title: "Querying with LINQ",
            description: "Filtering, projecting and grouping sequences.",
            sections: &[
                SubSection {
                    title: "Where, Select and OrderBy",
                    explanation: "<p>LINQ operators chain into a pipeline. Most are <strong>deferred</strong>: nothing runs until the sequence is enumerated, for example by <code>ToList()</code> or a <code>foreach</code>.</p>",
                    code_example: Some(
                        r#"var adults = people
    .Where(p => p.Age >= 18)
    .OrderBy(p => p.LastName)
    .Select(p => $"{p.FirstName} {p.LastName}")
    .ToList();"#,
                    ),
                },
                SubSection {
                    title: "GroupBy and aggregation",
                    explanation: "<p><code>GroupBy</code> buckets elements by a key. Each group is itself a sequence, so aggregates like <code>Count()</code>, <code>Sum()</code> and <code>Average()</code> apply per group.</p>",
                    code_example: Some(
                        r#"var totals = orders
    .GroupBy(o => o.Customer)
    .Select(g => new { Customer = g.Key, Total = g.Sum(o => o.Amount) })
    .OrderByDescending(x => x.Total);"#,
                    ),
                },
                SubSection {
                    title: "Deferred execution pitfalls",
                    explanation: "<p>Enumerating a deferred query twice runs it twice. If the source is expensive, or changes between enumerations, materialise it once with <code>ToList()</code> or <code>ToArray()</code>.</p>",
                    code_example: None,
                },
            ],
            code_example: Some(
                r#"record Order(string Customer, decimal Amount);

var orders = new[]
{
    new Order("acme", 120m),
    new Order("globex", 75m),
    new Order("acme", 30m),
};

foreach (var g in orders.GroupBy(o => o.Customer))
{
    Console.WriteLine($"{g.Key}: {g.Sum(o => o.Amount)}");
}"#,
            ),
            exercise: Some(Exercise {
                instructions: "Given a list of orders, find the customer with the highest average order value using a single LINQ query.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Write a CSV sales report generator driven entirely by LINQ.",
        requirements: &[
            "Parse lines of region,product,quantity,unitPrice into records",
            "Skip malformed lines and report how many were skipped",
            "Print revenue per region, highest first",
            "Print the best-selling product by quantity",
        ],
        starter_code: r#"public record Sale(string Region, string Product, int Quantity, decimal UnitPrice);

static IEnumerable<Sale> Parse(IEnumerable<string> lines)
{
    // TODO
    yield break;
}"#,
    }),
};
