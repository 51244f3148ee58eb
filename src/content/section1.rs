use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static CSHARP_FUNDAMENTALS: Section = Section {
    title: "C# Fundamentals",
    description: "Types, variables, control flow and methods: the building blocks every C# program is made of.",
    lessons: &[
        Lesson {
            title: "Variables and Built-in Types",
            description: "How C# stores values, and why the compiler cares about their types.",
            sections: &[
                SubSection {
                    title: "Declaring variables",
                    explanation: "<p>C# is <strong>statically typed</strong>: every variable has a type fixed at compile time. You can spell the type out, or let the compiler infer it with <code>var</code>.</p><p>Inference does not make a variable dynamic. <code>var count = 3;</code> is still an <code>int</code> forever.</p>",
                    code_example: Some(
                        r#"int count = 3;
string name = "Ada";
var price = 19.99m;   // decimal, inferred
bool isActive = true;

// count = "three";   // compile error: cannot convert string to int"#,
                    ),
                },
                SubSection {
                    title: "Value types and reference types",
                    explanation: "<p>Value types (<code>int</code>, <code>double</code>, <code>bool</code>, <code>struct</code>s) hold their data directly. Reference types (<code>string</code>, arrays, <code>class</code>es) hold a reference to data on the heap.</p><p>Assigning a value type copies the value; assigning a reference type copies the reference.</p>",
                    code_example: Some(
                        r#"int a = 1;
int b = a;
b++;            // a is still 1

int[] xs = { 1, 2, 3 };
int[] ys = xs;
ys[0] = 99;     // xs[0] is now 99 too"#,
                    ),
                },
                SubSection {
                    title: "Nullable types",
                    explanation: "<p>Value types cannot be <code>null</code> unless you mark them nullable with <code>?</code>. With nullable reference types enabled, the compiler also warns when a reference might be <code>null</code>.</p><ul><li><code>??</code> supplies a fallback</li><li><code>?.</code> short-circuits member access</li></ul>",
                    code_example: Some(
                        r#"int? age = null;
int shownAge = age ?? 0;

string? nickname = GetNickname();
int length = nickname?.Length ?? 0;"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Declare variables for a product: a name, a unit price as decimal, a quantity as int and an optional discount as decimal?. Print the total, applying the discount only when it has a value.",
            }),
        },
        Lesson {
            title: "Control Flow",
            description: "Making decisions and repeating work with conditionals, loops and switch expressions.",
            sections: &[
                SubSection {
                    title: "if, else and the conditional operator",
                    explanation: "<p>Conditions must be <code>bool</code>; C# never treats <code>0</code> or <code>null</code> as false. The conditional operator <code>cond ? a : b</code> is an expression and produces a value.</p>",
                    code_example: Some(
                        r#"if (temperature > 30)
{
    Console.WriteLine("Hot");
}
else if (temperature < 5)
{
    Console.WriteLine("Cold");
}

string label = score >= 50 ? "pass" : "fail";"#,
                    ),
                },
                SubSection {
                    title: "Loops",
                    explanation: "<p><code>for</code> suits counted loops, <code>while</code> suits loops driven by a condition, and <code>foreach</code> walks any <code>IEnumerable</code>. Use <code>break</code> to leave a loop early and <code>continue</code> to skip to the next iteration.</p>",
                    code_example: Some(
                        r#"for (int i = 0; i < 3; i++)
{
    Console.WriteLine(i);
}

foreach (var name in new[] { "Ada", "Grace", "Linus" })
{
    if (name.StartsWith("G")) continue;
    Console.WriteLine(name);
}"#,
                    ),
                },
                SubSection {
                    title: "Switch expressions and patterns",
                    explanation: "<p>Switch expressions map an input to a value using <em>patterns</em>. The discard <code>_</code> handles everything else. The compiler warns when a switch is not exhaustive.</p>",
                    code_example: Some(
                        r#"string Describe(int n) => n switch
{
    < 0 => "negative",
    0 => "zero",
    > 0 and < 10 => "small",
    _ => "large",
};"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Write FizzBuzz for 1 to 30 using a for loop and a switch expression over the tuple (n % 3, n % 5).",
            }),
        },
        Lesson {
            title: "Methods",
            description: "Packaging logic into reusable, testable methods.",
            sections: &[
                SubSection {
                    title: "Parameters and return values",
                    explanation: "<p>A method declares its return type, name and parameters. Expression-bodied members (<code>=&gt;</code>) keep one-line methods short. Optional parameters need a default value and must come last.</p>",
                    code_example: Some(
                        r#"static int Add(int a, int b) => a + b;

static string Greet(string name, string greeting = "Hello")
{
    return $"{greeting}, {name}!";
}"#,
                    ),
                },
                SubSection {
                    title: "out, ref and tuples",
                    explanation: "<p><code>out</code> parameters let a method hand back extra values, which is how the <code>TryParse</code> family works. For new code, returning a <strong>tuple</strong> is usually clearer.</p>",
                    code_example: Some(
                        r#"if (int.TryParse(input, out int value))
{
    Console.WriteLine(value * 2);
}

static (int Min, int Max) Range(int[] xs) => (xs.Min(), xs.Max());
var (min, max) = Range(new[] { 4, 1, 9 });"#,
                    ),
                },
            ],
            code_example: Some(
                r#"static double Average(params int[] values)
{
    if (values.Length == 0) return 0;
    return values.Sum() / (double)values.Length;
}

Console.WriteLine(Average(3, 4, 8));"#,
            ),
            exercise: Some(Exercise {
                instructions: "Write a TryDivide(int a, int b, out int result) method that returns false instead of throwing when b is zero, then rewrite it to return a (bool Ok, int Value) tuple.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Build a console grade calculator that reads scores, validates them and prints a letter grade for each one plus the class average.",
        requirements: &[
            "Read scores from the console until the user enters an empty line",
            "Reject input that is not an integer between 0 and 100 without crashing",
            "Map each score to a letter grade with a switch expression",
            "Print the average with two decimal places",
        ],
        starter_code: r#"using System;
using System.Collections.Generic;

var scores = new List<int>();

// TODO: read input until an empty line

static string LetterGrade(int score)
{
    // TODO: use a switch expression
    throw new NotImplementedException();
}"#,
    }),
};
